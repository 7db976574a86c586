//! Server info resource definition.

use serde_json::{Value, json};

use super::{ResourceContext, ResourceDefinition};

/// Server information resource.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "dchub://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Gateway name, version, backend URL and the number of exposed tools";

    fn render(ctx: &ResourceContext) -> Value {
        json!({
            "server": ctx.server_name,
            "version": ctx.version,
            "backend_url": ctx.backend_url,
            "tool_count": ctx.tools.len(),
            "credential_forwarding": {
                "header": "X-API-Key",
                "query_parameter": "api_key"
            }
        })
    }
}
