//! Tool definitions module.
//!
//! Each tool is defined in its own file under a per-API folder.

pub mod jokes;

pub use jokes::{
    GetConsistentJokeTool, GetJokeByIdParams, GetJokeByIdTool, GetJokeByTypeParams,
    GetJokeByTypeTool, GetJokeTool, Joke, JokeClient, JokeError,
};
