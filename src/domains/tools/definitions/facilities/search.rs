//! Facility search tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::super::{BackendRequest, ToolDefinition, clamp_limit};
use crate::core::backend::QueryParams;

/// Largest page the backend serves for facility search.
const MAX_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    25
}

/// Parameters for facility search.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchFacilitiesParams {
    /// Free-text search (e.g. 'Equinix Dallas' or 'hyperscale').
    #[serde(default)]
    pub query: String,

    /// Filter by country name or ISO code (e.g. 'US', 'Germany').
    #[serde(default)]
    pub country: String,

    /// Filter by state/province (e.g. 'Texas', 'Virginia').
    #[serde(default)]
    pub state: String,

    /// Filter by city (e.g. 'Dallas', 'Frankfurt').
    #[serde(default)]
    pub city: String,

    /// Filter by operator/provider name (e.g. 'Equinix', 'Digital Realty').
    #[serde(default)]
    pub provider: String,

    /// Max results to return (1-100, default 25).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Search data center facilities by location, provider, or keyword.
pub struct SearchFacilitiesTool;

impl ToolDefinition for SearchFacilitiesTool {
    const NAME: &'static str = "search_facilities";
    const TITLE: &'static str = "Search Data Center Facilities";
    const DESCRIPTION: &'static str = "Search 50,000+ global data center facilities by location, provider, or keyword. Returns JSON with matching facilities including name, location, provider, capacity, and coordinates.";

    type Params = SearchFacilitiesParams;

    fn request(params: &Self::Params) -> BackendRequest {
        let query = QueryParams::new()
            .with("query", params.query.as_str())
            .with("country", params.country.as_str())
            .with("state", params.state.as_str())
            .with("city", params.city.as_str())
            .with("provider", params.provider.as_str())
            .with("limit", clamp_limit(params.limit, MAX_LIMIT));

        BackendRequest::new("/api/v1/facilities", query)
    }
}
