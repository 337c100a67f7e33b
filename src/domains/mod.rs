//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the joke tools and the client for the joke API
//! - **resources**: read-only data such as the list of joke types

pub mod resources;
pub mod tools;
