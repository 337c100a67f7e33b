//! Client for the Official Joke API.
//!
//! Endpoints used:
//! - `GET /random_joke` -> one joke object
//! - `GET /jokes/{id}` -> one joke object
//! - `GET /{type}/random` -> array of joke objects
//!
//! Every call is a single GET. There is no retry and no caching.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::core::config::JokesApiConfig;

/// A joke record as returned by the upstream API.
///
/// Only `setup` and `punchline` are read; `id`, `type` and anything else
/// the API adds are ignored whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// Setup and punchline on two lines.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.setup, self.punchline)
    }
}

/// Errors talking to the joke API.
#[derive(Debug, Error)]
pub enum JokeError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Connection, DNS or timeout failure.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// Body was not the JSON shape we expect.
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The category endpoint returned an empty array.
    #[error("{url} returned no jokes")]
    Empty { url: String },
}

/// Async client for the joke API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct JokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl JokeClient {
    /// Build a client from configuration.
    pub fn new(config: &JokesApiConfig) -> Result<Self, JokeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self::from_parts(http, &config.base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_parts(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path. The path is appended as given.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch one random joke.
    pub async fn random(&self) -> Result<Joke, JokeError> {
        self.get("random_joke").await
    }

    /// Fetch the joke with the given id. The id is not range-checked.
    pub async fn by_id(&self, id: i64) -> Result<Joke, JokeError> {
        self.get(&format!("jokes/{}", id)).await
    }

    /// Fetch a random joke of the given type. The type is sent as-is.
    pub async fn by_type(&self, joke_type: &str) -> Result<Joke, JokeError> {
        let path = format!("{}/random", joke_type);
        let jokes: Vec<Joke> = self.get(&path).await?;

        jokes.into_iter().next().ok_or_else(|| JokeError::Empty {
            url: self.url(&path),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, JokeError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| JokeError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(JokeError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| JokeError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::jokes::mock_api::MockJokeApi;
    use axum::http::StatusCode as MockStatus;
    use serde_json::json;

    #[test]
    fn test_render_two_lines() {
        let joke = Joke {
            setup: "S".to_string(),
            punchline: "P".to_string(),
        };
        assert_eq!(joke.render(), "S\nP");
        assert_eq!(joke.to_string(), "S\nP");
    }

    #[test]
    fn test_deserialize_full_record() {
        let joke: Joke = serde_json::from_value(json!({
            "type": "general",
            "setup": "S",
            "punchline": "P",
            "id": 7
        }))
        .unwrap();
        assert_eq!(joke.render(), "S\nP");
    }

    #[tokio::test]
    async fn test_odd_extra_fields_are_ignored() {
        let api = MockJokeApi::serve(json!({
            "setup": "S",
            "punchline": "P",
            "id": "7",
            "type": ["not", "a", "string"],
            "rating": null
        }))
        .await;
        let joke = api.client().random().await.unwrap();
        assert_eq!(joke.render(), "S\nP");
    }

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let client = JokeClient::from_parts(reqwest::Client::new(), "http://example.test/");
        assert_eq!(client.base_url(), "http://example.test");
        assert_eq!(client.url("random_joke"), "http://example.test/random_joke");
    }

    #[tokio::test]
    async fn test_random_hits_random_joke() {
        let api = MockJokeApi::serve(json!({ "setup": "S", "punchline": "P" })).await;
        let joke = api.client().random().await.unwrap();
        assert_eq!(joke.render(), "S\nP");
        assert_eq!(api.requested_paths(), vec!["/random_joke"]);
    }

    #[tokio::test]
    async fn test_by_type_takes_first_element() {
        let api = MockJokeApi::serve(json!([
            { "setup": "S1", "punchline": "P1" },
            { "setup": "S2", "punchline": "P2" }
        ]))
        .await;
        let joke = api.client().by_type("dad").await.unwrap();
        assert_eq!(joke.render(), "S1\nP1");
        assert_eq!(api.requested_paths(), vec!["/dad/random"]);
    }

    #[tokio::test]
    async fn test_by_type_path_is_not_normalized() {
        let api = MockJokeApi::serve(json!([{ "setup": "S", "punchline": "P" }])).await;
        let client = api.client();
        client.by_type("/dad").await.unwrap();
        client.by_type("").await.unwrap();
        assert_eq!(api.requested_paths(), vec!["//dad/random", "//random"]);
    }

    #[tokio::test]
    async fn test_by_type_empty_array() {
        let api = MockJokeApi::serve(json!([])).await;
        let err = api.client().by_type("general").await.unwrap_err();
        assert!(matches!(err, JokeError::Empty { .. }));
    }

    #[tokio::test]
    async fn test_upstream_status_error() {
        let api =
            MockJokeApi::serve_with_status(MockStatus::NOT_FOUND, json!({ "message": "nope" }))
                .await;
        let err = api.client().by_id(100_000).await.unwrap_err();
        match err {
            JokeError::Status { status, url } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(url.ends_with("/jokes/100000"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_fields_is_decode_error() {
        let api = MockJokeApi::serve(json!({ "setup": "no punchline" })).await;
        let err = api.client().random().await.unwrap_err();
        assert!(matches!(err, JokeError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let client = JokeClient::from_parts(http, "http://127.0.0.1:1");
        let err = client.random().await.unwrap_err();
        assert!(matches!(err, JokeError::Request { .. }));
    }

    // Live API (run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_random_joke() {
        let client = JokeClient::new(&JokesApiConfig::default()).unwrap();
        let joke = client.random().await.unwrap();
        assert!(!joke.setup.is_empty());
    }
}
