//! Failures that stop a transport.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP listener could not be opened.
    #[error("cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The client never completed the MCP initialize exchange.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// The transport was up and then stopped with an error.
    #[error("transport stopped: {0}")]
    Serve(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    pub fn handshake(msg: impl Into<String>) -> Self {
        Self::Handshake(msg.into())
    }

    pub fn serve(msg: impl Into<String>) -> Self {
        Self::Serve(msg.into())
    }
}
