//! Resource service implementation.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use serde_json::Value;
use tracing::info;

use super::definitions::ResourceContext;
use super::error::ResourceError;
use super::registry::get_all_resources;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Produces the resource body.
    pub render: fn(&ResourceContext) -> Value,
}

/// Service for listing and reading resources.
pub struct ResourceService {
    context: ResourceContext,
    resources: Vec<ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService rendering from `context`.
    pub fn new(context: ResourceContext) -> Self {
        info!("Initializing ResourceService");
        Self {
            context,
            resources: get_all_resources(),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|e| e.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let body = serde_json::to_string_pretty(&(entry.render)(&self.context))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text: body,
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn test_service() -> ResourceService {
        ResourceService::new(ResourceContext::new(&Config::default(), vec![]))
    }

    #[tokio::test]
    async fn test_list_resources() {
        let resources = test_service().list_resources().await;
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let result = test_service()
            .read_resource("dchub://server/info")
            .await
            .unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                text, mime_type, ..
            } => {
                assert!(text.contains("dchub-mcp"));
                assert_eq!(mime_type.as_deref(), Some("application/json"));
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = test_service().read_resource("dchub://server/nope").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
