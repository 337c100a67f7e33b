//! Shared constants and result helpers for the joke tools.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

use super::client::{Joke, JokeError};

/// The joke `get_consistent_joke` always tells.
pub const CONSISTENT_JOKE: &str = "What's brown and sticky?\nA stick! Ha ha ha ha";

/// Categories the upstream API knows about.
pub const JOKE_TYPES: [&str; 4] = ["general", "knock-knock", "programming", "dad"];

/// First line of every failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Sorry, I failed to fetch a joke. I am... a joke.";

pub fn is_known_joke_type(joke_type: &str) -> bool {
    JOKE_TYPES.contains(&joke_type)
}

/// Create a success result with text content.
pub fn success_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Turn a fetch outcome into a tool result.
///
/// Failures become an `isError` result rather than a protocol error, so the
/// model sees what went wrong.
pub fn joke_result(outcome: Result<Joke, JokeError>) -> CallToolResult {
    match outcome {
        Ok(joke) => success_result(joke.render()),
        Err(e) => {
            error!("Error fetching joke: {}", e);
            CallToolResult::error(vec![Content::text(format!(
                "{}\n{}",
                FETCH_FAILED_MESSAGE, e
            ))])
        }
    }
}

/// Deserialize rmcp call arguments into a params struct.
pub fn parse_params<P: DeserializeOwned>(
    arguments: Option<Map<String, Value>>,
) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Deserialize HTTP JSON-RPC arguments into a params struct.
#[cfg(feature = "http")]
pub fn parse_http_params<P: DeserializeOwned>(arguments: Value) -> Result<P, ToolError> {
    let arguments = if arguments.is_null() {
        Value::Object(Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Render a tool result the way the HTTP transport returns it.
#[cfg(feature = "http")]
pub fn to_http_response(result: CallToolResult) -> Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}
