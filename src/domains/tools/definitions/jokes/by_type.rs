//! Joke-by-type tool.
//!
//! The upstream category endpoint answers with an array; the first joke is
//! returned. Unrecognised types are logged and still sent upstream as-is.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

#[cfg(feature = "http")]
use super::common::{parse_http_params, to_http_response};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::client::JokeClient;
use super::common::{is_known_joke_type, joke_result, parse_params};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetJokeByTypeParams {
    #[schemars(
        description = "The type of joke: \"general\", \"knock-knock\", \"programming\", or \"dad\""
    )]
    pub joke_type: String,
}

#[derive(Debug, Clone)]
pub struct GetJokeByTypeTool;

impl GetJokeByTypeTool {
    pub const NAME: &'static str = "get_joke_by_type";

    pub const DESCRIPTION: &'static str = "Get a joke of a specific type. \
         The type can be \"general\", \"knock-knock\", \"programming\", or \"dad\".";

    pub async fn execute(params: &GetJokeByTypeParams, client: &JokeClient) -> CallToolResult {
        if is_known_joke_type(&params.joke_type) {
            info!("Fetching a {} joke", params.joke_type);
        } else {
            warn!(
                "Unrecognised joke type {:?}, asking the API anyway",
                params.joke_type
            );
        }
        joke_result(client.by_type(&params.joke_type).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &JokeClient,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetJokeByTypeParams = parse_http_params(arguments)?;
        Ok(to_http_response(Self::execute(&params, client).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetJokeByTypeParams>(),
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
                let params: GetJokeByTypeParams = parse_params(args)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::jokes::common::FETCH_FAILED_MESSAGE;
    use crate::domains::tools::definitions::jokes::mock_api::{MockJokeApi, text_of};
    use serde_json::json;

    fn params(joke_type: &str) -> GetJokeByTypeParams {
        GetJokeByTypeParams {
            joke_type: joke_type.to_string(),
        }
    }

    #[tokio::test]
    async fn test_joke_by_type_text() {
        let api = MockJokeApi::serve(json!([{ "setup": "S", "punchline": "P" }])).await;
        let result = GetJokeByTypeTool::execute(&params("programming"), &api.client()).await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "S\nP");
        assert_eq!(api.requested_paths(), vec!["/programming/random"]);
    }

    #[tokio::test]
    async fn test_unknown_type_is_forwarded_verbatim() {
        let api = MockJokeApi::serve(json!([{ "setup": "S", "punchline": "P" }])).await;
        GetJokeByTypeTool::execute(&params("limerick"), &api.client()).await;
        GetJokeByTypeTool::execute(&params("knock-knock"), &api.client()).await;
        assert_eq!(
            api.requested_paths(),
            vec!["/limerick/random", "/knock-knock/random"]
        );
    }

    #[tokio::test]
    async fn test_object_instead_of_array_is_tool_error() {
        let api = MockJokeApi::serve(json!({ "setup": "S", "punchline": "P" })).await;
        let result = GetJokeByTypeTool::execute(&params("dad"), &api.client()).await;
        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with(FETCH_FAILED_MESSAGE));
    }

    #[tokio::test]
    async fn test_empty_array_is_tool_error() {
        let api = MockJokeApi::serve(json!([])).await;
        let result = GetJokeByTypeTool::execute(&params("general"), &api.client()).await;
        assert_eq!(result.is_error, Some(true));
    }
}
