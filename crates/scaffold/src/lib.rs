// crates/scaffold/src/lib.rs
//! Project generation: derives the names a new game uses and lays out its
//! folders and `game.toml`. Runs at generation time only; the runtime never
//! sees templates.

pub mod names;
pub mod project;

pub use names::{ProjectNames, DEFAULT_PROJECT_ID};
pub use project::{create_project, ScaffoldError, CONFIG_FILE_NAME};
