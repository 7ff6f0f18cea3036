// src/error.rs
use std::io;
use std::path::PathBuf;

/// Boxed error used at the collaborator seam. The accessor passes these
/// through untouched.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors from the crate's own loading paths (config file, dataset file).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: invalid record: {source}", .path.display())]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: missing header row", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("{}: unsupported dataset format (expected .jsonl, .json or .csv)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("config line {line}: {msg}")]
    Config { line: usize, msg: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
