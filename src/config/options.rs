// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;

use super::consts::*;
use crate::error::{Error, Result};

/// Settings shared by the accessor and the default collaborators.
/// The accessor never looks inside; it hands the whole value to the
/// collaborator factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Cached dataset file (.jsonl / .json / .csv)
    pub dataset_path: PathBuf,
    /// Where the scraper drops raw pages, one subdirectory per case
    pub raw_dir: PathBuf,

    /// Scheme and host, e.g. `https://domsdatabasen.dk`
    pub base_url: String,
    /// Path template joined onto `base_url`; `{id}` marks the case id
    pub case_path: String,
    pub max_redirects: usize,
    pub timeout_secs: u64,
    pub user_agent: String,

    /// Field list the default builder projects onto
    pub fields: Vec<String>,

    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        let store = PathBuf::from(STORE_DIR);
        Self {
            dataset_path: store.join(DATASET_FILE),
            raw_dir: store.join(RAW_SUBDIR),
            base_url: s!(BASE_URL),
            case_path: s!(CASE_PATH),
            max_redirects: MAX_REDIRECTS,
            timeout_secs: TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
            fields: DEFAULT_FIELDS.iter().map(|f| s!(*f)).collect(),
            log_file: store.join(LOG_FILE),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read a `key=value` config file. Keys not present keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&text)
    }

    /// Like `load`, but a missing file just means defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut cfg = Self::default();

        for (ix, line) in text.lines().enumerate() {
            let line_no = ix + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }

            let Some(eq) = line.find('=') else {
                return Err(Error::Config { line: line_no, msg: format!("expected key=value, got {line:?}") });
            };
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim();

            match key {
                "dataset_path"  => cfg.dataset_path = PathBuf::from(val),
                "raw_dir"       => cfg.raw_dir = PathBuf::from(val),
                "base_url"      => cfg.base_url = s!(val),
                "case_path"     => cfg.case_path = s!(val),
                "max_redirects" => cfg.max_redirects = parse_num(val, key, line_no)?,
                "timeout_secs"  => cfg.timeout_secs = parse_num(val, key, line_no)?,
                "user_agent"    => cfg.user_agent = s!(val),
                "fields" => {
                    cfg.fields = val.split(',')
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .map(String::from)
                        .collect();
                }
                "log_file"  => cfg.log_file = PathBuf::from(val),
                "log_level" => {
                    cfg.log_level = val.parse().map_err(|_| Error::Config {
                        line: line_no,
                        msg: format!("unknown log_level {val:?}"),
                    })?;
                }
                _ => {} // unknown keys are ignored
            }
        }

        Ok(cfg)
    }

    /// Full URL for one case. A template without `{id}` gets the id appended.
    pub fn case_url(&self, case_id: &str) -> String {
        let path = if self.case_path.contains("{id}") {
            self.case_path.replace("{id}", case_id)
        } else {
            format!("{}{}", self.case_path, case_id)
        };
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

fn parse_num<T: std::str::FromStr>(val: &str, key: &str, line: usize) -> Result<T> {
    val.parse().map_err(|_| Error::Config { line, msg: format!("{key}: not a number: {val:?}") })
}
