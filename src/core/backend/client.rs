//! Outbound HTTP client.

use std::time::Duration;

use tracing::{debug, error, instrument};

use super::{BackendError, BackendResult, QueryParams};
use crate::core::config::BackendConfig;
use crate::core::context::RequestContext;

/// Header used to forward the caller's credential.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Client for the DC Hub REST backend.
///
/// Cheap to clone; clones share the underlying connection pool. There is no
/// retry, cache or rate limiting here: the backend owns its resilience.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the configured base URL and timeout.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("dchub-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL all paths are joined to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for `path` with the non-falsy part of `query`.
    pub fn build_url(&self, path: &str, query: &QueryParams) -> Result<String, BackendError> {
        let mut url = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };

        let pairs = query.to_pairs();
        if !pairs.is_empty() {
            let encoded = serde_urlencoded::to_string(&pairs)
                .map_err(|e| BackendError::request(e.to_string()))?;
            url.push('?');
            url.push_str(&encoded);
        }

        Ok(url)
    }

    /// GET `path` and return the JSON body.
    ///
    /// The credential of the current request scope, if any, is attached as
    /// `X-API-Key`.
    #[instrument(skip_all, fields(path = %path))]
    pub async fn fetch(&self, path: &str, query: &QueryParams) -> BackendResult {
        let result = self.send(path, query).await;
        if let Err(e) = &result {
            error!("API call failed: {} {:?} - {}", path, query.to_pairs(), e);
        }
        result
    }

    async fn send(&self, path: &str, query: &QueryParams) -> BackendResult {
        let url = self.build_url(path, query)?;
        let mut request = self.http.get(&url);

        if let Some(credential) = RequestContext::current_credential() {
            debug!("Forwarding API key to backend");
            request = request.header(API_KEY_HEADER, credential.expose());
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
