//! In-process stand-in for the joke API, for tests.
//!
//! Serves one canned JSON body for every path and records the paths hit.

use axum::{Json, Router, http::StatusCode, http::Uri};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use super::client::JokeClient;

pub struct MockJokeApi {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockJokeApi {
    /// Answer every request with `200 OK` and `body`.
    pub async fn serve(body: Value) -> Self {
        Self::serve_with_status(StatusCode::OK, body).await
    }

    pub async fn serve_with_status(status: StatusCode, body: Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let body = Arc::new(body);

        let app = Router::new().fallback(move |uri: Uri| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().unwrap().push(uri.path().to_string());
                (status, Json(Value::clone(&body)))
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// A client pointed at this mock, bypassing any proxy settings.
    pub fn client(&self) -> JokeClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        JokeClient::from_parts(http, &self.base_url)
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Text of the first content item of a tool result.
pub fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        other => panic!("expected text content, got {other:?}"),
    }
}
