//! Site suitability analysis tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{BackendRequest, ToolDefinition};
use crate::core::backend::QueryParams;

/// Meters per mile, as the backend's scoring engine expects radii in meters.
const METERS_PER_MILE: i64 = 1609;

fn default_radius_miles() -> i64 {
    25
}

/// Parameters for site analysis.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeSiteParams {
    /// Site latitude (e.g. 32.7767).
    #[serde(default)]
    pub latitude: f64,

    /// Site longitude (e.g. -96.7970).
    #[serde(default)]
    pub longitude: f64,

    /// Street address (alternative to lat/lng).
    #[serde(default)]
    pub address: String,

    /// Analysis radius in miles (default 25).
    #[serde(default = "default_radius_miles")]
    pub radius_miles: i64,
}

/// Evaluate a location for data center suitability.
pub struct AnalyzeSiteTool;

impl ToolDefinition for AnalyzeSiteTool {
    const NAME: &'static str = "analyze_site";
    const TITLE: &'static str = "Analyze Site for Data Center";
    const DESCRIPTION: &'static str = "Evaluate a location for data center suitability using DC Hub's scoring engine. Analyzes power infrastructure, fiber connectivity, flood/seismic risk, labor market, tax incentives, and nearby facilities. Returns JSON with composite site score (0-100), component scores, plus nearby facilities and infrastructure.";

    type Params = AnalyzeSiteParams;

    fn request(params: &Self::Params) -> BackendRequest {
        let query = QueryParams::new()
            .with("lat", params.latitude)
            .with("lng", params.longitude)
            .with("address", params.address.as_str())
            .with(
                "radius",
                params.radius_miles.saturating_mul(METERS_PER_MILE),
            );

        BackendRequest::new("/api/v1/energy/site-analysis", query)
    }
}
