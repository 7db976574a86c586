//! Tool Router - builds the rmcp ToolRouter for the STDIO transport.

use rmcp::handler::server::tool::ToolRouter;

use super::ToolServices;
use super::definitions::common::create_route;
use super::definitions::{
    AnalyzeSiteTool, GetFacilityTool, GetMarketIntelTool, GetNewsTool, ListTransactionsTool,
    SearchFacilitiesTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(services: ToolServices) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<SearchFacilitiesTool, S>(services.clone()))
        .with_route(create_route::<GetFacilityTool, S>(services.clone()))
        .with_route(create_route::<ListTransactionsTool, S>(services.clone()))
        .with_route(create_route::<GetMarketIntelTool, S>(services.clone()))
        .with_route(create_route::<GetNewsTool, S>(services.clone()))
        .with_route(create_route::<AnalyzeSiteTool, S>(services))
}
