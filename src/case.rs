// src/case.rs
//
// Case identifiers and case records.
//
// A record is a flat mapping from field name to JSON value. Every record in
// the cached dataset carries a `case_id` string; that field is the lookup key.

use std::fmt;

use serde_json::Map;
pub use serde_json::Value;

/// Name of the field every dataset record is keyed on.
pub const CASE_ID_FIELD: &str = "case_id";

/// Normalized case identifier. Integers become their decimal string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseId(String);

impl CaseId {
    pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CaseId {
    fn as_ref(&self) -> &str { &self.0 }
}

impl From<&str> for CaseId {
    fn from(s: &str) -> Self { Self(s!(s)) }
}

impl From<String> for CaseId {
    fn from(s: String) -> Self { Self(s) }
}

impl From<&String> for CaseId {
    fn from(s: &String) -> Self { Self(s.clone()) }
}

impl From<&CaseId> for CaseId {
    fn from(id: &CaseId) -> Self { id.clone() }
}

macro_rules! case_id_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for CaseId {
                fn from(n: $t) -> Self { Self(n.to_string()) }
            }
        )+
    };
}

case_id_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// One case record: field name → value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> { self.fields.get(key) }

    pub fn remove(&mut self, key: &str) -> Option<Value> { self.fields.remove(key) }

    pub fn contains_key(&self, key: &str) -> bool { self.fields.contains_key(key) }

    /// The `case_id` field, only when it is a string.
    /// Records keyed any other way never match a lookup.
    pub fn case_id(&self) -> Option<&str> {
        self.fields.get(CASE_ID_FIELD).and_then(Value::as_str)
    }

    /// Convenience accessor for string fields.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> { self.fields.iter() }

    pub fn keys(&self) -> impl Iterator<Item = &String> { self.fields.keys() }

    pub fn into_value(self) -> Value { Value::Object(self.fields) }

    /// Serialize as a single JSON object.
    pub fn to_json(&self, pretty: bool) -> String {
        let v = Value::Object(self.fields.clone());
        let out = if pretty { serde_json::to_string_pretty(&v) } else { serde_json::to_string(&v) };
        // Serializing a Value with string keys cannot fail
        out.unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self { Self { fields } }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self { r.into_value() }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;
    fn into_iter(self) -> Self::IntoIter { self.fields.iter() }
}
