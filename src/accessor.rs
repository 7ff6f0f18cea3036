// src/accessor.rs
//! Cached case lookup with a scrape → process → build fallback.
//!
//! ```text
//! get_case(id) ──hit──▶ record from the cached dataset (borrowed)
//!      │
//!      └─miss─▶ collaborators (built once) ─▶ scrape ─▶ process ─▶ build ─▶ new record (owned)
//! ```
//!
//! A miss never writes back into the cached dataset. Persisting new cases is
//! left to whatever rebuilds the dataset file.

use std::borrow::Cow;

use crate::builder::{DatasetBuilder, SchemaBuilder};
use crate::case::{CaseId, Record};
use crate::config::AppConfig;
use crate::error::{BoxError, Result};
use crate::processor::{PageProcessor, Processor};
use crate::progress::{Progress, Stage};
use crate::scraper::{HttpScraper, Scraper};
use crate::store::{self, Dataset};

/// The three objects a cache miss needs.
pub struct Collaborators {
    pub scraper: Box<dyn Scraper>,
    pub processor: Box<dyn Processor>,
    pub builder: Box<dyn DatasetBuilder>,
}

impl Collaborators {
    pub fn new(
        scraper: impl Scraper + 'static,
        processor: impl Processor + 'static,
        builder: impl DatasetBuilder + 'static,
    ) -> Self {
        Self {
            scraper: Box::new(scraper),
            processor: Box::new(processor),
            builder: Box::new(builder),
        }
    }

    /// HTTP scraper, raw-page processor and field-list builder.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, BoxError> {
        Ok(Self::new(HttpScraper::new(cfg)?, PageProcessor::new(cfg), SchemaBuilder::new(cfg)))
    }
}

/// Builds the collaborators on the first cache miss.
pub type CollaboratorFactory = Box<dyn Fn(&AppConfig) -> Result<Collaborators, BoxError>>;

pub struct CaseAccessor {
    config: AppConfig,
    dataset: Dataset,
    factory: CollaboratorFactory,
    collaborators: Option<Collaborators>,
}

impl CaseAccessor {
    /// Load the cached dataset named in `config` and use the default
    /// collaborators for misses.
    pub fn open(config: AppConfig) -> Result<Self> {
        let dataset = store::load_dataset(&config.dataset_path)?;
        log::info!("Loaded cached dataset: {} records from {}", dataset.len(), config.dataset_path.display());
        Ok(Self::with_defaults(config, dataset))
    }

    pub fn with_defaults(config: AppConfig, dataset: Dataset) -> Self {
        Self::new(config, dataset, Collaborators::from_config)
    }

    /// `factory` is not called here; it runs on the first miss and, once it
    /// succeeds, never again for this accessor.
    pub fn new<F>(config: AppConfig, dataset: Dataset, factory: F) -> Self
    where
        F: Fn(&AppConfig) -> Result<Collaborators, BoxError> + 'static,
    {
        Self { config, dataset, factory: Box::new(factory), collaborators: None }
    }

    /// Get a case record: from the cached dataset if present, otherwise
    /// scraped, processed and built on the spot.
    ///
    /// Errors from the collaborators are returned as they were raised.
    pub fn get_case(&mut self, case_id: impl Into<CaseId>) -> Result<Cow<'_, Record>, BoxError> {
        self.get_case_with_progress(case_id, None)
    }

    pub fn get_case_with_progress(
        &mut self,
        case_id: impl Into<CaseId>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Cow<'_, Record>, BoxError> {
        let case_id = case_id.into();

        if let Some(ix) = self.dataset.position(&case_id) {
            log::info!("Found case_id {case_id} in cached dataset.");
            return Ok(Cow::Borrowed(&self.dataset.records()[ix]));
        }

        log::info!("Case_id {case_id} not found in cached dataset. Scraping and processing the case...");

        let c = match self.collaborators {
            Some(ref mut c) => c,
            None => {
                log::debug!("Initialising scraper, processor and dataset builder");
                self.collaborators.insert((self.factory)(&self.config)?)
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.begin(Stage::ALL.len());
            p.log(&format!("Case {case_id} not cached; fetching"));
        }

        c.scraper.scrape(&case_id)?;
        if let Some(p) = progress.as_deref_mut() { p.stage_done(Stage::Scrape); }

        let processed = c.processor.process(&case_id)?;
        if let Some(p) = progress.as_deref_mut() { p.stage_done(Stage::Process); }

        let sample = c.builder.make_dataset_sample(processed)?;
        if let Some(p) = progress.as_deref_mut() {
            p.stage_done(Stage::Build);
            p.finish();
        }

        Ok(Cow::Owned(sample))
    }

    /// Whether `case_id` would be served from the cached dataset.
    pub fn contains(&self, case_id: impl Into<CaseId>) -> bool {
        self.dataset.position(&case_id.into()).is_some()
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }

    pub fn config(&self) -> &AppConfig { &self.config }

    /// True once a miss has built the collaborators.
    pub fn collaborators_ready(&self) -> bool { self.collaborators.is_some() }
}
