//! Query parameter mapping for backend calls.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Insertion-ordered mapping of query parameter names to JSON values.
///
/// The same mapping is forwarded to the backend and written to the audit
/// log, so it serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(String, Value)>);

impl QueryParams {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`QueryParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing any previous value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drop every entry whose value is falsy.
    pub fn compact(mut self) -> Self {
        self.0.retain(|(_, v)| !is_falsy(v));
        self
    }

    /// String pairs for URL encoding; falsy values are skipped.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, v)| !is_falsy(v))
            .map(|(k, v)| (k.clone(), query_text(v)))
            .collect()
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

/// Empty, absent, zero or false values are never sent to the backend.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn query_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
