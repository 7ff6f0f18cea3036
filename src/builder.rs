// src/builder.rs
use serde_json::Value;

use crate::case::{Record, CASE_ID_FIELD};
use crate::config::AppConfig;
use crate::error::BoxError;

/// Shapes a processed record into a dataset record.
pub trait DatasetBuilder {
    fn make_dataset_sample(&mut self, processed: Record) -> Result<Record, BoxError>;
}

impl<T: DatasetBuilder + ?Sized> DatasetBuilder for Box<T> {
    fn make_dataset_sample(&mut self, processed: Record) -> Result<Record, BoxError> {
        (**self).make_dataset_sample(processed)
    }
}

/// Projects onto a fixed field list: listed fields are kept (missing ones
/// become `null`), everything else is dropped. `case_id` is always kept.
pub struct SchemaBuilder {
    fields: Vec<String>,
}

impl SchemaBuilder {
    pub fn new(cfg: &AppConfig) -> Self {
        Self::with_fields(cfg.fields.iter().cloned())
    }

    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if !fields.iter().any(|f| f == CASE_ID_FIELD) {
            fields.insert(0, s!(CASE_ID_FIELD));
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[String] { &self.fields }
}

impl DatasetBuilder for SchemaBuilder {
    fn make_dataset_sample(&mut self, mut processed: Record) -> Result<Record, BoxError> {
        if processed.case_id().is_none() {
            return Err("processed record has no case_id".into());
        }

        let mut out = Record::new();
        for f in &self.fields {
            let v = processed.remove(f).unwrap_or(Value::Null);
            out.insert(f.clone(), v);
        }
        Ok(out)
    }
}
