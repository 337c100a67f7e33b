//! Configuration management for the jokes MCP server.
//!
//! This module provides a centralized configuration structure that is
//! populated from defaults and then overlaid with environment variables.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default upstream joke API.
pub const DEFAULT_JOKES_API_URL: &str = "https://official-joke-api.appspot.com";

/// Default upstream request timeout in seconds.
pub const DEFAULT_JOKES_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream joke API configuration.
    pub jokes: JokesApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Where and how to reach the joke API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokesApiConfig {
    /// Base URL, without the endpoint path.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for JokesApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_JOKES_API_URL.to_string(),
            timeout_secs: DEFAULT_JOKES_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "jokes".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            jokes: JokesApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `MCP_`, e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_JOKES_API_URL`. A `.env` file in the working
    /// directory is read first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_JOKES_API_URL") {
            info!("Using joke API at {}", url);
            config.jokes.base_url = url;
        }

        if let Ok(raw) = std::env::var("MCP_JOKES_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.jokes.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_JOKES_TIMEOUT_SECS={:?}, using {}s",
                    raw, DEFAULT_JOKES_TIMEOUT_SECS
                ),
            }
        }

        config.transport = TransportConfig::from_env();

        config
    }
}
