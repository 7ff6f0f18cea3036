// src/processor.rs
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::case::{CaseId, Record, CASE_ID_FIELD};
use crate::config::AppConfig;
use crate::core::html::{remove_blocks_ci, slice_between_ci, strip_tags};
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::error::BoxError;
use crate::store;

/// Turns scraped raw material for a case into a processed record.
pub trait Processor {
    fn process(&mut self, case_id: &CaseId) -> Result<Record, BoxError>;
}

impl<T: Processor + ?Sized> Processor for Box<T> {
    fn process(&mut self, case_id: &CaseId) -> Result<Record, BoxError> {
        (**self).process(case_id)
    }
}

/// Reads the page the scraper stored and extracts its visible text.
///
/// A body that is a JSON object is taken field by field. Anything else is
/// treated as HTML and reduced to `title` and `text`. `case_id` is always
/// set to the requested id.
pub struct PageProcessor {
    raw_dir: PathBuf,
}

impl PageProcessor {
    pub fn new(cfg: &AppConfig) -> Self {
        Self { raw_dir: cfg.raw_dir.clone() }
    }
}

impl Processor for PageProcessor {
    fn process(&mut self, case_id: &CaseId) -> Result<Record, BoxError> {
        let page = store::load_raw_page(&self.raw_dir, case_id)?;
        let rec = process_page(case_id, &page);
        log::debug!("Processed case {case_id}: {} fields", rec.len());
        Ok(rec)
    }
}

/// Page → record, no IO.
pub fn process_page(case_id: &CaseId, page: &str) -> Record {
    let mut rec = match serde_json::from_str::<Map<String, Value>>(page) {
        Ok(obj) => Record::from(obj),
        Err(_) => html_record(page),
    };
    rec.insert(CASE_ID_FIELD, Value::String(s!(case_id.as_str())));
    rec
}

fn html_record(page: &str) -> Record {
    let mut rec = Record::new();

    let title = slice_between_ci(page, "<title", "</title>")
        .map(clean_text)
        .unwrap_or_default();
    rec.insert("title", Value::String(title));

    let body = slice_between_ci(page, "<body", "</body>").unwrap_or(page);
    let body = remove_blocks_ci(body, "<script", "</script>");
    let body = remove_blocks_ci(&body, "<style", "</style>");
    rec.insert("text", Value::String(clean_text(&body)));

    rec
}

/// Tags out first, so decoded `&lt;` can't open a fake tag.
fn clean_text(s: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(s)))
}
