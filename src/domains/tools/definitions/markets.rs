//! Market intelligence tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{BackendRequest, ToolDefinition, check_path_segment, path_segment};
use crate::domains::tools::ToolError;
use crate::core::backend::QueryParams;

fn default_metric() -> String {
    "overview".to_string()
}

/// Parameters for market intelligence.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetMarketIntelParams {
    /// Target market (e.g. 'Dallas', 'Northern Virginia', 'Frankfurt'). Empty = global overview.
    #[serde(default)]
    pub market: String,

    /// Type of data: 'overview', 'capacity', 'pricing', 'growth', 'power'.
    #[serde(default = "default_metric")]
    pub metric: String,
}

/// Get data center market intelligence and statistics.
///
/// A named market goes to the market detail endpoint, which may require a
/// credential; no market means the public market list. The backend decides
/// what an anonymous caller may see.
pub struct GetMarketIntelTool;

impl ToolDefinition for GetMarketIntelTool {
    const NAME: &'static str = "get_market_intel";
    const TITLE: &'static str = "Get Market Intelligence";
    const DESCRIPTION: &'static str = "Get data center market intelligence and statistics. Returns JSON with market statistics including total MW, facility count, absorption rates, pricing benchmarks, and growth trends.";

    type Params = GetMarketIntelParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        check_path_segment("market", &params.market)
    }

    fn request(params: &Self::Params) -> BackendRequest {
        let audit = QueryParams::new()
            .with("market", params.market.as_str())
            .with("metric", params.metric.as_str());

        let path = if params.market.is_empty() {
            "/api/v1/markets/list".to_string()
        } else {
            format!("/api/v1/markets/{}", path_segment(&params.market))
        };

        BackendRequest::new(path, QueryParams::new()).with_audit(audit)
    }
}
