//! The consistent joke tool: same joke, every single time, no network.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

#[cfg(feature = "http")]
use super::common::{parse_http_params, to_http_response};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::common::{CONSISTENT_JOKE, parse_params, success_result};

/// Takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetConsistentJokeParams {}

#[derive(Debug, Clone)]
pub struct GetConsistentJokeTool;

impl GetConsistentJokeTool {
    pub const NAME: &'static str = "get_consistent_joke";

    pub const DESCRIPTION: &'static str = "Tell the same joke, every single time. Be consistent.";

    pub fn execute() -> CallToolResult {
        info!("Telling the consistent joke");
        success_result(CONSISTENT_JOKE)
    }

    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let _params: GetConsistentJokeParams = parse_http_params(arguments)?;
        Ok(to_http_response(Self::execute()))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetConsistentJokeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            async move {
                let _params: GetConsistentJokeParams = parse_params(args)?;
                Ok(Self::execute())
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::jokes::mock_api::text_of;

    #[test]
    fn test_always_the_same_joke() {
        for _ in 0..3 {
            let result = GetConsistentJokeTool::execute();
            assert_eq!(result.is_error, Some(false));
            assert_eq!(
                text_of(&result),
                "What's brown and sticky?\nA stick! Ha ha ha ha"
            );
        }
    }

    #[test]
    fn test_params_ignore_extra_fields() {
        let parsed = serde_json::from_str::<GetConsistentJokeParams>(r#"{"anything": 1}"#);
        assert!(parsed.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let response = GetConsistentJokeTool::http_handler(serde_json::Value::Null).unwrap();
        assert_eq!(response["isError"], false);
        assert_eq!(response["content"][0]["text"], CONSISTENT_JOKE);
    }
}
