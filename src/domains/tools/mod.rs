//! Tools domain module.
//!
//! Tools are the functions MCP clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for the rmcp (STDIO) path
//! - `registry.rs` - Tool names and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/`
//! 2. Define params, `execute()`, `http_handler()`, `to_tool()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs`
//! 5. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::{Joke, JokeClient, JokeError};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
