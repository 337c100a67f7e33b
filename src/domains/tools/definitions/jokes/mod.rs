//! Joke tools backed by the Official Joke API.
//!
//! - `consistent`: the same joke every time, no network
//! - `random`: a random joke
//! - `by_id`: a joke by numeric id
//! - `by_type`: a random joke from one category
//!
//! `client` holds the HTTP client all three network tools share.

pub mod by_id;
pub mod by_type;
pub mod client;
pub mod common;
pub mod consistent;
pub mod random;

#[cfg(test)]
pub(crate) mod mock_api;

pub use by_id::{GetJokeByIdParams, GetJokeByIdTool};
pub use by_type::{GetJokeByTypeParams, GetJokeByTypeTool};
pub use client::{Joke, JokeClient, JokeError};
pub use consistent::{GetConsistentJokeParams, GetConsistentJokeTool};
pub use random::{GetJokeParams, GetJokeTool};
