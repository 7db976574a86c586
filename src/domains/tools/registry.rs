//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The name → handler table used by the HTTP transport
//! - Tool metadata for listing
//!
//! The table is built once at startup and never changes afterwards.

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use super::definitions::common::{ToolHandlerFn, dispatch, to_tool};
use super::definitions::{
    AnalyzeSiteTool, GetFacilityTool, GetMarketIntelTool, GetNewsTool, ListTransactionsTool,
    SearchFacilitiesTool, ToolDefinition,
};
use super::{ToolError, ToolServices};

/// A registered tool: descriptor plus handler.
struct ToolEntry {
    tool: Tool,
    handler: ToolHandlerFn,
}

fn entry<T: ToolDefinition>() -> ToolEntry {
    ToolEntry {
        tool: to_tool::<T>(),
        handler: dispatch::<T>,
    }
}

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    services: ToolServices,
    entries: Vec<ToolEntry>,
}

impl ToolRegistry {
    /// Create a registry dispatching through `services`.
    pub fn new(services: ToolServices) -> Self {
        Self {
            services,
            entries: vec![
                entry::<SearchFacilitiesTool>(),
                entry::<GetFacilityTool>(),
                entry::<ListTransactionsTool>(),
                entry::<GetMarketIntelTool>(),
                entry::<GetNewsTool>(),
                entry::<AnalyzeSiteTool>(),
            ],
        }
    }

    /// Get all tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.tool.name.as_ref()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool.clone()).collect()
    }

    /// Look up a tool descriptor by name.
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.find(name).map(|e| &e.tool)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.tool.name == name)
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// The handler runs on the caller's task, so the caller's request
    /// scope (and its credential) is visible to the backend client.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<CallToolResult, ToolError> {
        let Some(entry) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };
        (entry.handler)(arguments, self.services.clone()).await
    }
}
