//! Prompt templates.
//!
//! Syntax is deliberately small:
//! - `{{name}}` is replaced by the argument (empty when absent)
//! - `{{#if name}}yes{{else}}no{{/if}}` picks a branch on whether the
//!   argument is present and non-blank; `{{else}}` is optional and blocks
//!   do not nest

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const ELSE: &str = "{{else}}";
const END_IF: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template text.
    pub template: String,
}

impl PromptTemplate {
    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        render(&self.template, arguments)
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|v| !v.trim().is_empty())
}

fn render(template: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or_else(|| PromptError::template("unclosed '{{'"))?;
        let tag = after_open[..end].trim();
        rest = &after_open[end + CLOSE.len()..];

        if let Some(name) = tag.strip_prefix("#if ") {
            let block_end = rest
                .find(END_IF)
                .ok_or_else(|| PromptError::template(format!("missing {{{{/if}}}} for '{}'", name)))?;
            let block = &rest[..block_end];
            rest = &rest[block_end + END_IF.len()..];

            let (then_branch, else_branch) = block.split_once(ELSE).unwrap_or((block, ""));
            let branch = if is_set(arguments, name.trim()) {
                then_branch
            } else {
                else_branch
            };
            out.push_str(&render(branch, arguments)?);
        } else if tag == "else" || tag == "/if" {
            return Err(PromptError::template(format!("stray {{{{{}}}}}", tag)));
        } else if let Some(value) = arguments.get(tag) {
            out.push_str(value);
        }
    }

    out.push_str(rest);
    Ok(out)
}
