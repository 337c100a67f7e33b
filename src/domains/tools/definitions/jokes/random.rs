//! Random joke tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "http")]
use super::common::{parse_http_params, to_http_response};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::client::JokeClient;
use super::common::{joke_result, parse_params};

/// Takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetJokeParams {}

#[derive(Debug, Clone)]
pub struct GetJokeTool;

impl GetJokeTool {
    pub const NAME: &'static str = "get_joke";

    pub const DESCRIPTION: &'static str = "Get a random joke";

    pub async fn execute(client: &JokeClient) -> CallToolResult {
        info!("Fetching a random joke");
        joke_result(client.random().await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &JokeClient,
    ) -> Result<serde_json::Value, ToolError> {
        let _params: GetJokeParams = parse_http_params(arguments)?;
        Ok(to_http_response(Self::execute(client).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetJokeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(client: Arc<JokeClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                let _params: GetJokeParams = parse_params(args)?;
                Ok(Self::execute(&client).await)
            }
            .boxed()
        })
    }
}
