//! Error types and handling for the MCP server.
//!
//! Only server construction fails with [`Error`]; per-request problems are
//! answered in-band by the transport, and transport failures carry their
//! own [`TransportError`](super::transport::TransportError).

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend client could not be constructed.
    #[error("Backend error: {0}")]
    Backend(#[from] super::backend::BackendError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::BackendError;

    #[test]
    fn test_backend_error_converts() {
        let err: Error = BackendError::request("bad TLS backend").into();
        assert!(matches!(err, Error::Backend(_)));
        assert_eq!(
            err.to_string(),
            "Backend error: Backend request failed: bad TLS backend"
        );
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::config("backend URL missing");
        assert_eq!(err.to_string(), "Configuration error: backend URL missing");
    }
}
