// crates/engine_core/src/lib.rs

// Logic Modules
pub mod config;
pub mod engine_loop;
pub mod error;
pub mod game;
pub mod lifecycle;
pub mod platform;

// Internal Implementation Modules
mod renderer;

// Re-export Game so the game crate can find it easily
pub use config::{EngineSettings, DEFAULT_CONFIG_PATH};
pub use error::{exit_code, ConfigError, EngineError, PlatformError, RuntimeFailure};
pub use game::Game;
pub use lifecycle::LifecycleState;
pub use platform::{FrameEvents, HeadlessPlatform, Platform, WinitPlatform};
