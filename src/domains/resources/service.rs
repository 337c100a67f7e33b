//! Resource service implementation.
//!
//! Keeps the registered resources keyed by URI and answers list and read
//! requests. Resources are declared in `definitions/` and `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;

/// Service for managing and accessing resources.
pub struct ResourceService {
    config: Arc<Config>,

    /// Key: resource URI. Ordered so listings are stable.
    resources: BTreeMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content rendered at read time.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server identity and upstream API location.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService and register everything in the registry.
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: BTreeMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = serde_json::json!({
                    "name": self.config.server.name,
                    "version": self.config.server.version,
                    "jokes_api": self.config.jokes.base_url,
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(Config::default()))
    }

    fn text(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lists_registered_resources() {
        let resources = service().list_resources().await;
        assert_eq!(resources.len(), 2);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let result = service().read_resource("mcp://server/info").await.unwrap();
        let info: serde_json::Value = serde_json::from_str(text(&result)).unwrap();
        assert_eq!(info["name"], "jokes");
        assert_eq!(info["jokes_api"], "https://official-joke-api.appspot.com");
    }

    #[tokio::test]
    async fn test_read_joke_types() {
        let result = service().read_resource("jokes://types").await.unwrap();
        assert!(text(&result).contains("programming"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service().read_resource("jokes://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
