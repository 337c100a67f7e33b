//! Runs whichever transport the configuration selected.

use tracing::info;

use super::TransportConfig;
use crate::core::McpServer;
use crate::core::error::Result;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Owns the transport choice until `run` consumes it.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Serve `server` until the client disconnects (stdio) or the listener
    /// fails (http).
    pub async fn run(self, server: McpServer) -> Result<()> {
        info!("Serving jokes over {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await?,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await?,
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "stdio"))]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_selected_transport() {
        let service = TransportService::new(TransportConfig::Stdio);
        assert!(matches!(service.config(), TransportConfig::Stdio));
    }
}
