// src/lib.rs
//! Cached access to processed Domsdatabasen case records.
//!
//! [`CaseAccessor`] answers from a pre-built dataset when it can, and
//! otherwise runs a scraper, a processor and a dataset builder to produce
//! the record on demand.

#[macro_use]
pub mod macros;

pub mod accessor;
pub mod builder;
pub mod case;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod log;
pub mod processor;
pub mod progress;
pub mod scraper;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use accessor::{CaseAccessor, CollaboratorFactory, Collaborators};
pub use builder::{DatasetBuilder, SchemaBuilder};
pub use case::{CaseId, Record};
pub use config::AppConfig;
pub use error::{BoxError, Error};
pub use processor::{PageProcessor, Processor};
pub use scraper::{HttpScraper, Scraper};
pub use store::Dataset;
