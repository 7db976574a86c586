//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over `POST {rpc_path}`. Only that route passes through
//! [`scope_credential`], so every tool call it dispatches sees the caller's
//! API key; `GET /` and `GET /health` are served outside any request scope.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::credential::scope_credential;
use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// Protocol revisions this endpoint answers to, oldest first.
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2024-11-05", "2025-03-26", "2025-06-18"];

const LATEST_PROTOCOL_VERSION: &str = "2025-06-18";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// The body was not valid JSON.
    pub fn parse_error(detail: impl Into<String>) -> Self {
        Self::error(None, -32700, format!("Parse error: {}", detail.into()))
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<Value>, method: &str) -> Self {
        Self::error(id, -32601, format!("Method not found: {}", method))
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum application serving `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let state = AppState {
            server,
            rpc_path: self.config.rpc_path.clone(),
        };

        let rpc = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route_layer(middleware::from_fn(scope_credential));

        let mut app = Router::new()
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .merge(rpc)
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Bind the configured address and serve until the process stops.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;
        self.serve(listener, server).await
    }

    /// Serve on an already bound listener.
    pub async fn serve(self, listener: TcpListener, server: McpServer) -> TransportResult<()> {
        let addr = listener.local_addr()?;
        let app = self.router(server);

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "authentication": "Optional X-API-Key header or api_key query parameter, forwarded to the backend"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    payload: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::JsonSyntaxError(e)) => {
            warn!("Rejected malformed JSON-RPC body: {}", e.body_text());
            return Json(JsonRpcResponse::parse_error(e.body_text())).into_response();
        }
        Err(e) => {
            warn!("Rejected JSON-RPC body: {}", e.body_text());
            return Json(JsonRpcResponse::invalid_request(None)).into_response();
        }
    };

    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    match process_request(&state, request).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Process a JSON-RPC request. Notifications produce no response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::invalid_request(request.id));
    }

    let response = match request.method.as_str() {
        "initialize" => handle_initialize(state, request),
        "ping" => JsonRpcResponse::success(request.id, json!({})),
        "tools/list" => handle_tools_list(state, request),
        "tools/call" => handle_tools_call(state, request).await,
        "resources/list" => handle_resources_list(state, request).await,
        "resources/read" => handle_resources_read(state, request).await,
        "prompts/list" => handle_prompts_list(state, request).await,
        "prompts/get" => handle_prompts_get(state, request).await,
        method if method.starts_with("notifications/") => {
            info!("Received notification: {}", method);
            return None;
        }
        method => {
            warn!("Unknown method: {}", method);
            JsonRpcResponse::method_not_found(request.id, method)
        }
    };

    Some(response)
}

/// Split `params` out of a request, answering `-32602` when it is missing.
fn require_params(request: &JsonRpcRequest) -> Result<&Value, JsonRpcResponse> {
    request
        .params
        .as_ref()
        .ok_or_else(|| JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"))
}

fn require_str<'a>(
    request: &JsonRpcRequest,
    params: &'a Value,
    field: &str,
) -> Result<&'a str, JsonRpcResponse> {
    params.get(field).and_then(Value::as_str).ok_or_else(|| {
        JsonRpcResponse::invalid_params(request.id.clone(), format!("Missing {}", field))
    })
}

/// Pick the protocol revision to speak: the client's if supported, else ours.
fn negotiate_protocol_version(params: Option<&Value>) -> &'static str {
    params
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .and_then(|requested| {
            SUPPORTED_PROTOCOL_VERSIONS
                .iter()
                .copied()
                .find(|v| *v == requested)
        })
        .unwrap_or(LATEST_PROTOCOL_VERSION)
}

fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let version = negotiate_protocol_version(request.params.as_ref());
    info!("Processing initialize request (protocol {})", version);

    JsonRpcResponse::success(
        request.id,
        json!({
            "protocolVersion": version,
            "capabilities": {
                "tools": {},
                "resources": {},
                "prompts": {}
            },
            "serverInfo": {
                "name": state.server.name(),
                "version": state.server.version()
            },
            "instructions": state.server.instructions()
        }),
    )
}

fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    JsonRpcResponse::success(request.id, json!({ "tools": state.server.list_tools() }))
}

async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let (name, arguments) = match require_params(&request)
        .and_then(|params| Ok((require_str(&request, params, "name")?, params)))
    {
        Ok((name, params)) => (
            name.to_string(),
            params.get("arguments").cloned().unwrap_or(Value::Null),
        ),
        Err(response) => return response,
    };

    match state.server.call_tool(&name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

async fn handle_resources_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let resources = state.server.list_resources().await;
    JsonRpcResponse::success(request.id, json!({ "resources": resources }))
}

async fn handle_resources_read(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let uri = match require_params(&request).and_then(|p| require_str(&request, p, "uri")) {
        Ok(uri) => uri.to_string(),
        Err(response) => return response,
    };

    match state.server.read_resource(&uri).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

async fn handle_prompts_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let prompts = state.server.list_prompts().await;
    JsonRpcResponse::success(request.id, json!({ "prompts": prompts }))
}

async fn handle_prompts_get(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let (name, arguments) = match require_params(&request)
        .and_then(|params| Ok((require_str(&request, params, "name")?, params)))
    {
        Ok((name, params)) => (name.to_string(), params.get("arguments").cloned()),
        Err(response) => return response,
    };

    match state.server.get_prompt(&name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}
