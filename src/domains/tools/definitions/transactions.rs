//! M&A transaction listing tool.

use schemars::JsonSchema;
use serde::Deserialize;

use super::{BackendRequest, ToolDefinition, clamp_limit};
use crate::core::backend::QueryParams;

const MAX_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    25
}

/// Parameters for transaction listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListTransactionsParams {
    /// Filter by transaction year (e.g. 2024, 2025). 0 = all years.
    #[serde(default)]
    pub year: i64,

    /// Filter by acquiring company name.
    #[serde(default)]
    pub buyer: String,

    /// Filter by selling company name.
    #[serde(default)]
    pub seller: String,

    /// Max results (1-100, default 25).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// List data center M&A transactions with deal values and details.
pub struct ListTransactionsTool;

impl ToolDefinition for ListTransactionsTool {
    const NAME: &'static str = "list_transactions";
    const TITLE: &'static str = "List M&A Transactions";
    const DESCRIPTION: &'static str = "List data center M&A transactions with deal values and details. Returns JSON array of transactions with buyer, seller, deal value, MW capacity, market, and announcement date.";

    type Params = ListTransactionsParams;

    fn request(params: &Self::Params) -> BackendRequest {
        let query = QueryParams::new()
            .with("year", params.year)
            .with("buyer", params.buyer.as_str())
            .with("seller", params.seller.as_str())
            .with("limit", clamp_limit(params.limit, MAX_LIMIT));

        BackendRequest::new("/api/v1/transactions", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> BackendRequest {
        let params: ListTransactionsParams = serde_json::from_value(value).unwrap();
        ListTransactionsTool::request(&params)
    }

    #[test]
    fn test_all_years_omits_year() {
        let request = request(json!({}));
        assert_eq!(request.path, "/api/v1/transactions");
        assert!(!request.query.contains_key("year"));
        assert_eq!(request.query.get("limit"), Some(&json!(25)));
    }

    #[test]
    fn test_year_and_buyer_forwarded() {
        let request = request(json!({ "year": 2024, "buyer": "Blackstone", "limit": 500 }));
        assert_eq!(request.query.get("year"), Some(&json!(2024)));
        assert_eq!(request.query.get("buyer"), Some(&json!("Blackstone")));
        assert_eq!(request.query.get("limit"), Some(&json!(100)));
        assert!(!request.query.contains_key("seller"));
    }
}
