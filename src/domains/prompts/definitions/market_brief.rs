//! Market brief prompt definition.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

/// Asks for a briefing on one data center market.
pub struct MarketBriefPrompt;

impl PromptDefinition for MarketBriefPrompt {
    const NAME: &'static str = "market_brief";
    const DESCRIPTION: &'static str =
        "Brief on a data center market using market intel, transactions and news";

    fn template() -> &'static str {
        r#"Prepare a brief on the {{market}} data center market.

Use get_market_intel for market "{{market}}", list_transactions for recent deals involving the market, and get_news with topic "{{market}}".

{{#if focus}}Concentrate on: {{focus}}.{{else}}Cover capacity, pricing, vacancy, recent transactions and notable news.{{/if}}

Cite the figures returned by the tools and say when a tool returned an error."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("market", "Market name, e.g. Northern Virginia", true),
            argument("focus", "Aspect to emphasise, e.g. power or pricing", false),
        ]
    }
}
