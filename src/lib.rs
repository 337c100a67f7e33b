//! Jokes MCP Server Library
//!
//! Exposes the Official Joke API (<https://official-joke-api.appspot.com>)
//! to MCP clients as four tools: `get_consistent_joke`, `get_joke`,
//! `get_joke_by_id` and `get_joke_by_type`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic
//!   - **tools**: the joke tools and their HTTP client
//!   - **resources**: read-only data resources
//!
//! # Example
//!
//! ```rust,no_run
//! use jokes_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use crate::core::{Config, Error, McpServer, Result};
