//! Invocation record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::AuditError;

/// One tool dispatch, as written to the audit log. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRecord {
    /// When the tool was invoked (UTC).
    pub timestamp: DateTime<Utc>,

    /// Name of the invoked tool.
    pub tool_name: String,

    /// Parameters as JSON text, keys in the order the tool supplied them.
    pub parameters: String,

    /// Tag identifying which server produced the record.
    pub source: String,
}

impl InvocationRecord {
    /// Capture an invocation happening now.
    pub fn new<P>(tool_name: &str, parameters: &P, source: &str) -> Result<Self, AuditError>
    where
        P: Serialize + ?Sized,
    {
        Ok(Self {
            timestamp: Utc::now(),
            tool_name: tool_name.to_string(),
            parameters: serde_json::to_string(parameters)?,
            source: source.to_string(),
        })
    }

    /// ISO-8601 timestamp as stored.
    pub fn timestamp_text(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}
