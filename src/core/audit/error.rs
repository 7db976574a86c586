//! Audit error types.

use thiserror::Error;

/// Errors raised while recording an invocation.
///
/// These never reach callers; the sink logs them and moves on.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The backing store rejected the write or could not be opened.
    #[error("Audit storage error: {0}")]
    Storage(String),

    /// The invocation parameters could not be serialized.
    #[error("Audit serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuditError {
    /// Create a new storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<rusqlite::Error> for AuditError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
