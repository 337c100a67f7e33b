//! Error types and handling for the jokes MCP server.
//!
//! A single crate-level error for startup and serving: building the joke
//! client, validating config, and running the transport all return it.
//! Resource lookups never reach it; the server answers those with an MCP
//! error directly.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<crate::domains::tools::JokeError> for Error {
    fn from(err: crate::domains::tools::JokeError) -> Self {
        Self::Tool(err.into())
    }
}
