//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - A renderer producing its JSON body from the [`ResourceContext`]

pub mod server_info;
pub mod tool_catalog;

use rmcp::model::Tool;
use serde_json::Value;

use crate::core::Config;

pub use server_info::ServerInfoResource;
pub use tool_catalog::ToolCatalogResource;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "application/json";

    /// Produce the resource body.
    fn render(ctx: &ResourceContext) -> Value;
}

/// Server facts resources are rendered from.
#[derive(Debug, Clone)]
pub struct ResourceContext {
    pub server_name: String,
    pub version: String,
    pub backend_url: String,
    pub tools: Vec<Tool>,
}

impl ResourceContext {
    pub fn new(config: &Config, tools: Vec<Tool>) -> Self {
        Self {
            server_name: config.server.name.clone(),
            version: config.server.version.clone(),
            backend_url: config.backend.base_url.clone(),
            tools,
        }
    }
}
