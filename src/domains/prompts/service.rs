//! Prompt service implementation.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::info;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for listing and instantiating prompts.
pub struct PromptService {
    /// Registered prompts, in registration order.
    prompts: Vec<PromptTemplate>,
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptService {
    pub fn new() -> Self {
        info!("Initializing PromptService");
        Self {
            prompts: get_all_prompts(),
        }
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        for arg in &template.arguments {
            let supplied = arguments.get(&arg.name).is_some_and(|v| !v.trim().is_empty());
            if arg.required.unwrap_or(false) && !supplied {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_list_prompts() {
        let prompts = PromptService::new().list_prompts().await;
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].name, "market_brief");
    }

    #[tokio::test]
    async fn test_market_brief_with_focus() {
        let result = PromptService::new()
            .get_prompt(
                "market_brief",
                Some(args(&[("market", "Dallas"), ("focus", "power")])),
            )
            .await
            .unwrap();
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => {
                assert!(text.contains("the Dallas data center market"));
                assert!(text.contains("Concentrate on: power."));
                assert!(!text.contains("{{"));
            }
            _ => panic!("Expected text message"),
        }
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let result = PromptService::new()
            .get_prompt("site_selection", Some(args(&[("location", "  ")])))
            .await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = PromptService::new().get_prompt("greeting", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
