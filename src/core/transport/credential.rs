//! Credential ingress for the HTTP transport.
//!
//! The caller's API key arrives either as the `X-API-Key` header or as the
//! `api_key` query parameter; the header wins when both are present. Absence
//! is valid and means an anonymous caller.

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::core::backend::API_KEY_HEADER;
use crate::core::context::{Credential, RequestContext};

/// Query parameter accepted when the header is absent.
pub const API_KEY_QUERY_PARAM: &str = "api_key";

/// Pull the caller's credential out of a request's headers and query string.
pub fn extract_credential(headers: &HeaderMap, query: Option<&str>) -> Option<Credential> {
    let from_header = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(Credential::parse);
    if from_header.is_some() {
        return from_header;
    }

    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query?).ok()?;
    pairs
        .into_iter()
        .find(|(k, _)| k == API_KEY_QUERY_PARAM)
        .and_then(|(_, v)| Credential::parse(v))
}

/// Middleware running the rest of the request inside a [`RequestContext`].
pub async fn scope_credential(request: Request, next: Next) -> Response {
    let credential = extract_credential(request.headers(), request.uri().query());
    debug!(
        "Request credential: {}",
        if credential.is_some() { "present" } else { "absent" }
    );
    RequestContext::with_credential(credential)
        .scope(next.run(request))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(key: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(key) = key {
            headers.insert("x-api-key", HeaderValue::from_str(key).unwrap());
        }
        headers
    }

    #[test]
    fn test_header_credential() {
        let credential = extract_credential(&headers(Some("abc123")), None).unwrap();
        assert_eq!(credential.expose(), "abc123");
    }

    #[test]
    fn test_query_fallback_is_decoded() {
        let credential =
            extract_credential(&headers(None), Some("x=1&api_key=k%2Fy%3D%3D")).unwrap();
        assert_eq!(credential.expose(), "k/y==");
    }

    #[test]
    fn test_query_credential_kept_verbatim() {
        let credential = extract_credential(&headers(None), Some("api_key=+k+1+")).unwrap();
        assert_eq!(credential.expose(), " k 1 ");
    }

    #[test]
    fn test_header_wins_over_query() {
        let credential =
            extract_credential(&headers(Some("from-header")), Some("api_key=from-query")).unwrap();
        assert_eq!(credential.expose(), "from-header");
    }

    #[test]
    fn test_blank_header_falls_back_to_query() {
        let credential = extract_credential(&headers(Some("  ")), Some("api_key=q")).unwrap();
        assert_eq!(credential.expose(), "q");
    }

    #[test]
    fn test_absent_everywhere() {
        assert!(extract_credential(&headers(None), None).is_none());
        assert!(extract_credential(&headers(None), Some("apikey=x")).is_none());
        assert!(extract_credential(&headers(None), Some("api_key=")).is_none());
    }
}
