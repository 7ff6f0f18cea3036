// src/scraper.rs
use std::path::PathBuf;

use reqwest::blocking::Client;

use crate::case::CaseId;
use crate::config::AppConfig;
use crate::core::net;
use crate::error::BoxError;
use crate::store;

/// Fetches raw material for one case into local storage.
/// Nothing is returned; a `Processor` picks the material up afterwards.
pub trait Scraper {
    fn scrape(&mut self, case_id: &CaseId) -> Result<(), BoxError>;
}

impl<T: Scraper + ?Sized> Scraper for Box<T> {
    fn scrape(&mut self, case_id: &CaseId) -> Result<(), BoxError> {
        (**self).scrape(case_id)
    }
}

/// Single GET per case (redirects followed); the body lands in the raw store as-is.
pub struct HttpScraper {
    cfg: AppConfig,
    client: Client,
}

impl HttpScraper {
    pub fn new(cfg: &AppConfig) -> Result<Self, BoxError> {
        Ok(Self { cfg: cfg.clone(), client: net::client(cfg)? })
    }

    /// Fetch and store, returning where the page was written.
    pub fn fetch_to_store(&self, case_id: &CaseId) -> Result<PathBuf, BoxError> {
        let url = self.cfg.case_url(case_id.as_str());
        log::debug!("GET {url} for case {case_id}");

        let body = net::http_get(&self.client, &url)?;
        let written = store::save_raw_page(&self.cfg.raw_dir, case_id, &body)?;

        log::info!("Scraped case {case_id} ({} bytes) to {}", body.len(), written.display());
        Ok(written)
    }
}

impl Scraper for HttpScraper {
    fn scrape(&mut self, case_id: &CaseId) -> Result<(), BoxError> {
        self.fetch_to_store(case_id).map(|_| ())
    }
}
