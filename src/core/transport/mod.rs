//! How the joke server talks to its client.
//!
//! `stdio` (default feature) is what MCP clients launch. `http` adds a
//! plain JSON-RPC endpoint for curl and browsers. `TransportConfig::from_env`
//! picks one at startup and `TransportService` runs it.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
