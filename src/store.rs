// src/store.rs
//
// On-disk state:
// - the cached dataset: an ordered list of case records, loaded once
// - the raw store: one directory per scraped case holding the fetched page

use std::{collections::HashMap, fs, path::{Path, PathBuf}};

use serde_json::{Map, Value};

use crate::case::{CaseId, Record};
use crate::config::consts::RAW_PAGE_FILE;
use crate::core::sanitize::sanitize_case_dirname;
use crate::csv::{parse_rows, records_from_rows};
use crate::error::{Error, Result};

/// Cached case records in file order, plus a `case_id` → position index.
///
/// The index keeps the first occurrence of each id, so a lookup returns
/// exactly what a front-to-back scan would. Records without a string
/// `case_id` stay in the list but are not indexed.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (ix, r) in records.iter().enumerate() {
            if let Some(id) = r.case_id() {
                index.entry(s!(id)).or_insert(ix);
            }
        }
        Self { records, index }
    }

    /// Position of the first record with this `case_id`.
    pub fn position(&self, id: &CaseId) -> Option<usize> {
        self.index.get(id.as_str()).copied()
    }

    pub fn find(&self, id: &CaseId) -> Option<&Record> {
        self.position(id).map(|ix| &self.records[ix])
    }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Keyed case ids in dataset order (duplicates included).
    pub fn case_ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().filter_map(Record::case_id)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

/* ---------------- Dataset loading ---------------- */

/// Load the cached dataset. Format follows the extension:
/// - `.jsonl`: one JSON object per non-blank line
/// - `.json`: a top-level array of objects, or JSON Lines
/// - `.csv`: header row, then one record per row (all values strings)
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let ext = path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    let records = match ext.as_str() {
        "jsonl" | "json" | "csv" => {
            let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            match ext.as_str() {
                "csv" => parse_csv_records(&text, path)?,
                "json" if text.trim_start().starts_with('[') => parse_json_array(&text, path)?,
                _ => parse_json_lines(&text, path)?,
            }
        }
        _ => return Err(Error::UnsupportedFormat { path: path.to_path_buf() }),
    };

    let ds = Dataset::from_records(records);
    log::debug!("Loaded {} records ({} keyed) from {}", ds.len(), ds.index.len(), path.display());
    Ok(ds)
}

fn parse_json_lines(text: &str, path: &Path) -> Result<Vec<Record>> {
    let mut out = Vec::new();
    for (ix, line) in text.lines().enumerate() {
        if line.trim().is_empty() { continue; }
        let obj: Map<String, Value> = serde_json::from_str(line)
            .map_err(|source| Error::Json { path: path.to_path_buf(), line: ix + 1, source })?;
        out.push(Record::from(obj));
    }
    Ok(out)
}

fn parse_json_array(text: &str, path: &Path) -> Result<Vec<Record>> {
    let objs: Vec<Map<String, Value>> = serde_json::from_str(text)
        .map_err(|source| Error::Json { path: path.to_path_buf(), line: source.line(), source })?;
    Ok(objs.into_iter().map(Record::from).collect())
}

fn parse_csv_records(text: &str, path: &Path) -> Result<Vec<Record>> {
    let mut rows = parse_rows(text, ',').into_iter();
    let headers = rows.next()
        .ok_or_else(|| Error::MissingHeader { path: path.to_path_buf() })?;
    Ok(records_from_rows(&headers, rows.collect()))
}

/* ---------------- Raw page store ---------------- */

pub fn raw_case_dir(raw_dir: &Path, id: &CaseId) -> PathBuf {
    raw_dir.join(sanitize_case_dirname(id.as_str()))
}

pub fn raw_page_path(raw_dir: &Path, id: &CaseId) -> PathBuf {
    raw_case_dir(raw_dir, id).join(RAW_PAGE_FILE)
}

/// Write a fetched page, replacing any earlier copy.
pub fn save_raw_page(raw_dir: &Path, id: &CaseId, body: &str) -> Result<PathBuf> {
    let dir = raw_case_dir(raw_dir, id);
    fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

    let p = dir.join(RAW_PAGE_FILE);
    fs::write(&p, body).map_err(|e| Error::io(&p, e))?;
    Ok(p)
}

pub fn load_raw_page(raw_dir: &Path, id: &CaseId) -> Result<String> {
    let p = raw_page_path(raw_dir, id);
    fs::read_to_string(&p).map_err(|e| Error::io(&p, e))
}
