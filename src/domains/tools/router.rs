//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; the network tools share
//! one `JokeClient`.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    GetConsistentJokeTool, GetJokeByIdTool, GetJokeByTypeTool, GetJokeTool, JokeClient,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(jokes: Arc<JokeClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetConsistentJokeTool::create_route())
        .with_route(GetJokeTool::create_route(jokes.clone()))
        .with_route(GetJokeByIdTool::create_route(jokes.clone()))
        .with_route(GetJokeByTypeTool::create_route(jokes))
}
