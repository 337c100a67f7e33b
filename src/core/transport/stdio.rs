//! STDIO transport implementation.
//!
//! The client launches us as a subprocess and speaks JSON-RPC over our
//! stdin/stdout. Logs must therefore go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("{} is running on stdio", server.name());

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::handshake(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::serve(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
