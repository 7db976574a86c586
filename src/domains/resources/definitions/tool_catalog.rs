//! Tool catalog resource definition.

use serde_json::{Value, json};

use super::{ResourceContext, ResourceDefinition};

/// Every tool descriptor, as served by `tools/list`.
pub struct ToolCatalogResource;

impl ResourceDefinition for ToolCatalogResource {
    const URI: &'static str = "dchub://tools/catalog";
    const NAME: &'static str = "Tool Catalog";
    const DESCRIPTION: &'static str = "Names, descriptions and input schemas of all tools";

    fn render(ctx: &ResourceContext) -> Value {
        let tools: Vec<Value> = ctx
            .tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                })
            })
            .collect();
        json!({ "tools": tools })
    }
}
