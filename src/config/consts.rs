// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://domsdatabasen.dk";
// `{id}` is replaced by the case id. The site routes cases client-side,
// so the fragment never reaches the server.
pub const CASE_PATH: &str = "/#sag/{id}/";
pub const MAX_REDIRECTS: usize = 10;
pub const USER_AGENT: &str = "doms_access/0.1";
pub const TIMEOUT_SECS: u64 = 15;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const DATASET_FILE: &str = "dataset.jsonl";
pub const RAW_SUBDIR: &str = "raw";
pub const RAW_PAGE_FILE: &str = "page.html";

// Logging
pub const LOG_FILE: &str = "debug.log";

// Dataset schema used by the default builder when none is configured
pub const DEFAULT_FIELDS: &[&str] = &["case_id", "title", "text"];

// Looked up in the working directory when --config is not given
pub const CONFIG_FILE: &str = "doms_access.conf";
