//! Prompt Registry - central registration of all prompts.

use super::definitions::{MarketBriefPrompt, PromptDefinition, SiteSelectionPrompt};
use super::templates::PromptTemplate;

fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate {
        name: P::NAME.to_string(),
        description: Some(P::DESCRIPTION.to_string()),
        arguments: P::arguments(),
        template: P::template().to_string(),
    }
}

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<MarketBriefPrompt>(),
        build_template::<SiteSelectionPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![MarketBriefPrompt::NAME, SiteSelectionPrompt::NAME]
}
