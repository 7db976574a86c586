//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A parameters struct (decoded from call arguments, schema via schemars)
//! - A `ToolDefinition` impl mapping those parameters to one backend call
//!
//! Dispatch, auditing and serialization are shared and live in `common.rs`.

pub mod common;
pub mod facilities;
pub mod markets;
pub mod news;
pub mod site;
pub mod transactions;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::core::backend::QueryParams;
use crate::domains::tools::ToolError;

pub use facilities::{
    GetFacilityParams, GetFacilityTool, SearchFacilitiesParams, SearchFacilitiesTool,
};
pub use markets::{GetMarketIntelParams, GetMarketIntelTool};
pub use news::{GetNewsParams, GetNewsTool};
pub use site::{AnalyzeSiteParams, AnalyzeSiteTool};
pub use transactions::{ListTransactionsParams, ListTransactionsTool};

/// Trait for tool definitions.
///
/// A tool is fully described by its metadata and a pure mapping from its
/// parameters to the backend request it forwards.
pub trait ToolDefinition: Send + Sync + 'static {
    /// The unique name of the tool.
    const NAME: &'static str;

    /// Human-readable title.
    const TITLE: &'static str;

    /// Description shown to clients.
    const DESCRIPTION: &'static str;

    /// Decoded call arguments.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Reject parameters no backend call can be built from.
    fn validate(_params: &Self::Params) -> Result<(), ToolError> {
        Ok(())
    }

    /// Normalise the parameters into the backend call to make.
    fn request(params: &Self::Params) -> BackendRequest;
}

/// One outbound call, plus the parameters recorded in the audit log.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    /// API path, starting with `/`.
    pub path: String,

    /// Query parameters forwarded to the backend.
    pub query: QueryParams,

    /// Parameters written to the audit log.
    pub audit: QueryParams,
}

impl BackendRequest {
    /// A request whose audit entry mirrors its (compacted) query.
    pub fn new(path: impl Into<String>, query: QueryParams) -> Self {
        let query = query.compact();
        Self {
            path: path.into(),
            audit: query.clone(),
            query,
        }
    }

    /// Record `audit` instead of the forwarded query.
    pub fn with_audit(mut self, audit: QueryParams) -> Self {
        self.audit = audit;
        self
    }
}

/// Percent-encode a caller-supplied value used as a single path segment.
///
/// Callers must reject dot segments first with [`check_path_segment`].
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Reject values that URL parsing would resolve as `.` or `..`.
///
/// These cannot be escaped instead: URL parsing treats `%2e%2e` as `..`.
pub fn check_path_segment(field: &str, value: &str) -> Result<(), ToolError> {
    if value == "." || value == ".." {
        return Err(ToolError::invalid_arguments(format!(
            "{} must not be '.' or '..'",
            field
        )));
    }
    Ok(())
}

/// Clamp a result limit into `[1, max]`.
pub fn clamp_limit(limit: i64, max: i64) -> i64 {
    limit.clamp(1, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(10, 100), 10);
        assert_eq!(clamp_limit(0, 100), 1);
        assert_eq!(clamp_limit(-5, 100), 1);
        assert_eq!(clamp_limit(150, 100), 100);
        assert_eq!(clamp_limit(60, 50), 50);
    }

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("equinix-da1"), "equinix-da1");
        assert_eq!(path_segment("Northern Virginia"), "Northern%20Virginia");
        assert_eq!(path_segment("../admin"), "..%2Fadmin");
    }

    #[test]
    fn test_check_path_segment_rejects_dot_segments() {
        for value in [".", ".."] {
            assert!(
                matches!(
                    check_path_segment("market", value),
                    Err(ToolError::InvalidArguments(_))
                ),
                "{value:?} accepted"
            );
        }
        assert!(check_path_segment("market", "...").is_ok());
        assert!(check_path_segment("market", "equinix.da1").is_ok());
        assert!(check_path_segment("market", "").is_ok());
        // Encoded as %252E%252E, which is an ordinary segment.
        assert!(check_path_segment("market", "%2E%2E").is_ok());
    }

    #[test]
    fn test_backend_request_audits_compacted_query() {
        let request = BackendRequest::new(
            "/api/v1/news",
            QueryParams::new().with("topic", "").with("limit", 10),
        );
        assert_eq!(request.query, request.audit);
        assert!(!request.query.contains_key("topic"));
    }
}
