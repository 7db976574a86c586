//! Site selection prompt definition.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

/// Asks for a suitability assessment of a candidate location.
pub struct SiteSelectionPrompt;

impl PromptDefinition for SiteSelectionPrompt {
    const NAME: &'static str = "site_selection";
    const DESCRIPTION: &'static str =
        "Assess a candidate data center site for power, fiber and nearby facilities";

    fn template() -> &'static str {
        r#"Assess {{location}} as a site for a new data center.

Run analyze_site with address "{{location}}"{{#if radius_miles}} and radius_miles {{radius_miles}}{{/if}}, then search_facilities near the same location to list existing operators.

Summarise power availability, fiber connectivity, risk factors and competing facilities, and finish with a recommendation."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("location", "Address or place name of the candidate site", true),
            argument("radius_miles", "Search radius in miles (default 25)", false),
        ]
    }
}
