//! Resource Registry - central registration of all resources.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{JokeTypesResource, ResourceDefinition, ServerInfoResource};
use super::service::ResourceEntry;

/// Build a resource entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<JokeTypesResource>(),
        build_resource::<ServerInfoResource>(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![JokeTypesResource::URI, ServerInfoResource::URI]
}
