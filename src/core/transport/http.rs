//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over `POST {rpc_path}` so plain HTTP clients (curl,
//! browsers) can call the joke tools without an MCP SDK.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::INSTRUCTIONS;

/// MCP protocol revision this transport speaks.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;

    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_PARAMS, message)
    }
}

impl JsonRpcResponse {
    fn from_outcome(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(err)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
}

impl AppState {
    pub fn new(server: McpServer) -> Self {
        Self { server }
    }
}

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Build the axum router for the given state.
    pub fn router(&self, state: AppState) -> Router {
        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            app
        }
    }

    /// Run the HTTP transport until the server stops.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let app = self.router(AppState::new(server));

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC at POST {}, CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::serve(e.to_string()))
    }
}

async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    tracing::Span::current().record("method", request.method.as_str());
    let id = request.id.clone();
    Json(JsonRpcResponse::from_outcome(id, dispatch(&state, request).await))
}

/// Route one JSON-RPC request to the server.
pub async fn dispatch(state: &AppState, request: JsonRpcRequest) -> Result<Value, JsonRpcError> {
    if request.jsonrpc != "2.0" {
        return Err(JsonRpcError::new(
            JsonRpcError::INVALID_REQUEST,
            "Invalid Request",
        ));
    }

    let params = request.params.unwrap_or_else(|| json!({}));

    match request.method.as_str() {
        "initialize" => Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {}, "resources": {} },
            "serverInfo": {
                "name": state.server.name(),
                "version": state.server.version()
            },
            "instructions": INSTRUCTIONS
        })),
        "tools/list" => Ok(json!({ "tools": state.server.list_tools() })),
        "tools/call" => {
            let name = str_param(&params, "name")?;
            let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));
            info!("Calling tool {}", name);
            state
                .server
                .call_tool(name, arguments)
                .await
                .map_err(JsonRpcError::invalid_params)
        }
        "resources/list" => Ok(json!({ "resources": state.server.list_resources().await })),
        "resources/read" => {
            let uri = str_param(&params, "uri")?;
            state
                .server
                .read_resource(uri)
                .await
                .map_err(JsonRpcError::invalid_params)
        }
        method if method.starts_with("notifications/") => {
            debug!("Ignoring notification {}", method);
            Ok(Value::Null)
        }
        method => {
            warn!("Unknown method: {}", method);
            Err(JsonRpcError::new(
                JsonRpcError::METHOD_NOT_FOUND,
                "Method not found",
            ))
        }
    }
}

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, JsonRpcError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}'", key)))
}
