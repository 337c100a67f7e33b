//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `http_handler()` method (called via ToolRegistry for HTTP transport)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::{
    resources::ResourceService,
    tools::{JokeClient, build_tool_router},
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// Instructions sent to clients on initialize.
pub const INSTRUCTIONS: &str = "Tells jokes. Use get_joke for a random joke, get_joke_by_id for a \
     specific one, get_joke_by_type for one of: general, knock-knock, programming, dad. \
     get_consistent_joke always tells the same joke.";

/// The main MCP server handler.
///
/// Implements rmcp's `ServerHandler` and coordinates the tool router and
/// the resource service.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    /// Shared client for the upstream joke API.
    jokes: Arc<JokeClient>,

    resource_service: Arc<ResourceService>,

    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> super::error::Result<Self> {
        if config.jokes.base_url.trim().is_empty() {
            return Err(Error::config("joke API base URL is empty"));
        }

        let config = Arc::new(config);
        let jokes = Arc::new(JokeClient::new(&config.jokes)?);
        let resource_service = Arc::new(ResourceService::new(config.clone()));

        Ok(Self {
            tool_router: build_tool_router::<Self>(jokes.clone()),
            config,
            jokes,
            resource_service,
        })
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

    /// Get the shared joke API client.
    pub fn joke_client(&self) -> &Arc<JokeClient> {
        &self.jokes
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        ToolRegistry::new(self.joke_client().clone())
            .call_tool(name, arguments)
            .await
            .map_err(|e| e.to_string())
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .await
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        self.resource_service
            .read_resource(uri)
            .await
            .map(|result| serde_json::json!({ "contents": result.contents }))
            .map_err(|e| e.to_string())
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_reports_config_identity() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "jokes");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_lists_all_joke_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 4);
        assert!(tools.iter().all(|t| t.get("inputSchema").is_some()));
    }

    #[test]
    fn test_server_info_enables_tools_and_resources() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let mut config = Config::default();
        config.jokes.base_url = "  ".to_string();
        assert!(matches!(McpServer::new(config), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_read_unknown_resource_fails() {
        let server = McpServer::new(Config::default()).unwrap();
        assert!(server.read_resource("jokes://nope").await.is_err());
    }
}
