//! Dispatch plumbing shared by every tool.
//!
//! Handler shape: normalise → audit (detached) → backend call → pretty JSON.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool, ToolAnnotations},
};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::ToolDefinition;
use crate::domains::tools::{ToolError, ToolServices};

/// Type-erased HTTP handler stored in the registry.
pub type ToolHandlerFn =
    fn(Value, ToolServices) -> BoxFuture<'static, Result<CallToolResult, ToolError>>;

/// Run a tool with already-decoded parameters.
///
/// Never fails: a backend failure becomes the `{error: ...}` payload.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn execute<T: ToolDefinition>(
    params: &T::Params,
    services: &ToolServices,
) -> CallToolResult {
    let request = T::request(params);
    info!("Tool {} called -> {}", T::NAME, request.path);

    services.audit.record(T::NAME, &request.audit);

    let payload = match services.backend.fetch(&request.path, &request.query).await {
        Ok(body) => body,
        Err(e) => e.to_payload(),
    };

    json_text_result(&payload)
}

/// Decode raw call arguments into the tool's parameters and validate them.
///
/// Missing or `null` arguments decode as an empty object so every default
/// applies.
pub fn parse_params<T: ToolDefinition>(arguments: Value) -> Result<T::Params, ToolError> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    let params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    T::validate(&params)?;
    Ok(params)
}

/// Registry entry point: decode and execute.
pub fn dispatch<T: ToolDefinition>(
    arguments: Value,
    services: ToolServices,
) -> BoxFuture<'static, Result<CallToolResult, ToolError>> {
    async move {
        let params = parse_params::<T>(arguments)?;
        Ok(execute::<T>(&params, &services).await)
    }
    .boxed()
}

/// Create a Tool model for a definition (metadata).
pub fn to_tool<T: ToolDefinition>() -> Tool {
    Tool {
        name: T::NAME.into(),
        title: Some(T::TITLE.to_string()),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        output_schema: None,
        annotations: Some(ToolAnnotations {
            title: Some(T::TITLE.to_string()),
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: Some(true),
            open_world_hint: Some(true),
        }),
        icons: None,
        meta: None,
    }
}

/// Create a ToolRoute for the STDIO transport.
pub fn create_route<T, S>(services: ToolServices) -> ToolRoute<S>
where
    T: ToolDefinition,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let services = services.clone();
        async move {
            let params = parse_params::<T>(Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(execute::<T>(&params, &services).await)
        }
        .boxed()
    })
}

/// Wrap a JSON payload as pretty-printed text content.
pub fn json_text_result(payload: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            warn!("Failed to serialize tool result: {}", e);
            CallToolResult::error(vec![Content::text(format!(
                "Failed to serialize tool result: {}",
                e
            ))])
        }
    }
}

/// Shape a tool result for the JSON-RPC `tools/call` response.
pub fn to_http_response(result: CallToolResult) -> Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}
