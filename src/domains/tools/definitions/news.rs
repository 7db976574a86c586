//! Industry news tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{BackendRequest, ToolDefinition, clamp_limit};
use crate::core::backend::QueryParams;

const MAX_LIMIT: i64 = 50;

fn default_limit() -> i64 {
    10
}

/// Parameters for news listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNewsParams {
    /// Filter by topic keyword (e.g. 'AI', 'power', 'expansion', 'acquisition').
    #[serde(default)]
    pub topic: String,

    /// Filter by news source (e.g. 'DatacenterDynamics', 'BroadGroup').
    #[serde(default)]
    pub source: String,

    /// Max articles (1-50, default 10).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Latest data center industry news aggregated from 40+ sources.
pub struct GetNewsTool;

impl ToolDefinition for GetNewsTool {
    const NAME: &'static str = "get_news";
    const TITLE: &'static str = "Get Industry News";
    const DESCRIPTION: &'static str = "Get latest data center industry news aggregated from 40+ sources. Returns JSON array of news articles with title, source, date, summary, and URL.";

    type Params = GetNewsParams;

    fn request(params: &Self::Params) -> BackendRequest {
        let query = QueryParams::new()
            .with("topic", params.topic.as_str())
            .with("source", params.source.as_str())
            .with("limit", clamp_limit(params.limit, MAX_LIMIT));

        BackendRequest::new("/api/v1/news", query)
    }
}
