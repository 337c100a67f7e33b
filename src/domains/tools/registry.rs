//! Tool Registry - tool names and HTTP dispatch.
//!
//! The rmcp path routes through `router.rs`; the HTTP transport has no
//! ToolRouter context, so it dispatches by name here instead.

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{
    GetConsistentJokeTool, GetJokeByIdTool, GetJokeByTypeTool, GetJokeTool, JokeClient,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    jokes: Arc<JokeClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(jokes: Arc<JokeClient>) -> Self {
        Self { jokes }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetConsistentJokeTool::NAME,
            GetJokeTool::NAME,
            GetJokeByIdTool::NAME,
            GetJokeByTypeTool::NAME,
        ]
    }

    /// Dispatch an HTTP tool call to the matching handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            GetConsistentJokeTool::NAME => GetConsistentJokeTool::http_handler(arguments),
            GetJokeTool::NAME => GetJokeTool::http_handler(arguments, &self.jokes).await,
            GetJokeByIdTool::NAME => GetJokeByIdTool::http_handler(arguments, &self.jokes).await,
            GetJokeByTypeTool::NAME => {
                GetJokeByTypeTool::http_handler(arguments, &self.jokes).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
