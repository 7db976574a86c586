//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The same definitions feed two dispatchers:
//! - the rmcp `ToolRouter` used by the STDIO transport (`router.rs`)
//! - the `ToolRegistry` used by the HTTP transport (`registry.rs`)

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::{
    prompts::{PromptError, PromptService},
    resources::{ResourceContext, ResourceError, ResourceService},
    tools::{ToolError, ToolRegistry, ToolServices, build_tool_router, definitions::common},
};

const INSTRUCTIONS: &str = "Data center intelligence tools: facilities, transactions, \
market intel, industry news and site analysis. Results are the backend's JSON \
verbatim; a failed backend call comes back as {\"error\": \"Backend request failed: ...\"}. \
Over HTTP, pass your API key as the X-API-Key header or the api_key query parameter.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Name-to-handler table for the HTTP transport.
    tools: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for the STDIO transport.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> super::error::Result<Self> {
        if !config.backend.base_url.starts_with("http://")
            && !config.backend.base_url.starts_with("https://")
        {
            return Err(Error::config(format!(
                "backend URL must start with http:// or https://, got {:?}",
                config.backend.base_url
            )));
        }

        let services = ToolServices::from_config(&config)?;
        Ok(Self::with_services(config, services))
    }

    /// Create a server around pre-built tool services.
    pub fn with_services(config: Config, services: ToolServices) -> Self {
        let config = Arc::new(config);
        let tools = Arc::new(ToolRegistry::new(services.clone()));

        let resource_service = Arc::new(ResourceService::new(ResourceContext::new(
            &config,
            tools.tools(),
        )));
        let prompt_service = Arc::new(PromptService::new());

        Self {
            tool_router: build_tool_router::<Self>(services),
            config,
            tools,
            resource_service,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Usage notes sent to clients on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub async fn resource_count(&self) -> usize {
        self.resource_service.list_resources().await.len()
    }

    pub async fn prompt_count(&self) -> usize {
        self.prompt_service.list_prompts().await.len()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.tools()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Runs on the caller's task, inside whatever request scope the
    /// transport established.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<Value, ToolError> {
        let result = self.tools.call_tool(name, arguments).await?;
        Ok(common::to_http_response(result))
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::to_value(result)?)
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompt_service.list_prompts().await
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<Value, PromptError> {
        let arguments = arguments.and_then(|v| v.as_object().map(string_arguments));
        let result = self.prompt_service.get_prompt(name, arguments).await?;
        Ok(json_prompt_result(result))
    }
}

/// Keep the string-valued prompt arguments; numbers are accepted as text.
fn string_arguments(map: &serde_json::Map<String, Value>) -> HashMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k.clone(), s.clone())),
            Value::Number(n) => Some((k.clone(), n.to_string())),
            _ => None,
        })
        .collect()
}

fn json_prompt_result(result: GetPromptResult) -> Value {
    serde_json::json!({
        "description": result.description,
        "messages": result.messages
    })
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.as_ref().map(string_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}
