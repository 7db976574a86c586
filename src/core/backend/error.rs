//! Backend error types.

use serde_json::{Value, json};
use thiserror::Error;

/// Result of a backend call: the opaque JSON payload or a transport failure.
pub type BackendResult = Result<Value, BackendError>;

/// Ways an outbound call can fail.
///
/// All variants render as `Backend request failed: <details>`, which is the
/// exact text surfaced to the caller.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The call exceeded the configured timeout.
    #[error("Backend request failed: {0}")]
    Timeout(String),

    /// The backend could not be reached.
    #[error("Backend request failed: {0}")]
    Connection(String),

    /// The backend answered with a non-2xx status.
    #[error("Backend request failed: {0}")]
    Status(String),

    /// The response body was unreadable or not JSON.
    #[error("Backend request failed: {0}")]
    Body(String),

    /// The request could not be built (bad URL, header or query).
    #[error("Backend request failed: {0}")]
    Request(String),
}

impl BackendError {
    /// Create a request-building error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// The uniform error value returned to callers in place of a payload.
    pub fn to_payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        let details = err.to_string();
        if err.is_timeout() {
            Self::Timeout(details)
        } else if err.is_status() {
            Self::Status(details)
        } else if err.is_decode() || err.is_body() {
            Self::Body(details)
        } else if err.is_builder() {
            Self::Request(details)
        } else {
            Self::Connection(details)
        }
    }
}
