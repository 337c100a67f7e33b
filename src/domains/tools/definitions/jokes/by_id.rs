//! Joke-by-id tool.
//!
//! The id goes into the request path unchanged. Ids the API does not know
//! come back as an upstream error result.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
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

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetJokeByIdParams {
    #[schemars(description = "Numeric id of the joke (the API currently has ids 1 to 451)")]
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct GetJokeByIdTool;

impl GetJokeByIdTool {
    pub const NAME: &'static str = "get_joke_by_id";

    pub const DESCRIPTION: &'static str = "Get a joke with a specific id";

    pub async fn execute(params: &GetJokeByIdParams, client: &JokeClient) -> CallToolResult {
        info!("Fetching joke #{}", params.id);
        joke_result(client.by_id(params.id).await)
    }

    /// Entry point for rmcp calls: bad arguments are a protocol error, a
    /// failed fetch is an `isError` result.
    pub async fn call(
        arguments: Option<JsonObject>,
        client: &JokeClient,
    ) -> Result<CallToolResult, McpError> {
        let params: GetJokeByIdParams = parse_params(arguments)?;
        Ok(Self::execute(&params, client).await)
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &JokeClient,
    ) -> Result<serde_json::Value, ToolError> {
        let params: GetJokeByIdParams = parse_http_params(arguments)?;
        Ok(to_http_response(Self::execute(&params, client).await))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetJokeByIdParams>(),
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
            async move { Self::call(args, &client).await }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::jokes::mock_api::{MockJokeApi, text_of};
    use axum::http::StatusCode;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_params_require_integer_id() {
        assert!(serde_json::from_str::<GetJokeByIdParams>(r#"{"id": 42}"#).is_ok());
        assert!(serde_json::from_str::<GetJokeByIdParams>(r#"{"id": "42"}"#).is_err());
        assert!(serde_json::from_str::<GetJokeByIdParams>(r#"{"id": 4.2}"#).is_err());
        assert!(serde_json::from_str::<GetJokeByIdParams>("{}").is_err());
    }

    #[tokio::test]
    async fn test_call_rejects_string_id() {
        let api = MockJokeApi::serve(json!({ "setup": "S", "punchline": "P" })).await;
        let arguments = json!({ "id": "x" }).as_object().cloned();
        let err = GetJokeByIdTool::call(arguments, &api.client())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(api.requested_paths().is_empty());
    }

    #[tokio::test]
    async fn test_call_fetches_joke() {
        let api = MockJokeApi::serve(json!({ "setup": "S", "punchline": "P" })).await;
        let arguments = json!({ "id": 7 }).as_object().cloned();
        let result = GetJokeByIdTool::call(arguments, &api.client())
            .await
            .unwrap();
        assert_eq!(text_of(&result), "S\nP");
        assert_eq!(api.requested_paths(), vec!["/jokes/7"]);
    }

    #[tokio::test]
    async fn test_joke_by_id_text() {
        let api = MockJokeApi::serve(json!({ "setup": "S", "punchline": "P" })).await;
        let params = GetJokeByIdParams { id: 42 };
        let result = GetJokeByIdTool::execute(&params, &api.client()).await;
        assert_eq!(text_of(&result), "S\nP");
        assert_eq!(api.requested_paths(), vec!["/jokes/42"]);
    }

    #[tokio::test]
    async fn test_out_of_range_id_is_forwarded() {
        let api = MockJokeApi::serve_with_status(StatusCode::NOT_FOUND, json!({})).await;
        for id in [0, -3, 99_999] {
            let params = GetJokeByIdParams { id };
            let result = GetJokeByIdTool::execute(&params, &api.client()).await;
            assert_eq!(result.is_error, Some(true));
        }
        assert_eq!(
            api.requested_paths(),
            vec!["/jokes/0", "/jokes/-3", "/jokes/99999"]
        );
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_rejects_missing_id() {
        let api = MockJokeApi::serve(json!({ "setup": "S", "punchline": "P" })).await;
        let err = GetJokeByIdTool::http_handler(json!({}), &api.client())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(api.requested_paths().is_empty());
    }
}
