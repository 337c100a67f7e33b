//! Joke types resource: the categories `get_joke_by_type` understands.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::definitions::jokes::common::JOKE_TYPES;

pub struct JokeTypesResource;

impl ResourceDefinition for JokeTypesResource {
    const URI: &'static str = "jokes://types";
    const NAME: &'static str = "Joke Types";
    const DESCRIPTION: &'static str = "Joke categories accepted by get_joke_by_type";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Text(serde_json::json!(JOKE_TYPES).to_string())
    }
}
