// crates/engine_core/src/error.rs
//! Error taxonomy for the bootstrap and the process exit codes it maps to.

use std::path::PathBuf;

use engine_shared::GameError;
use thiserror::Error;

use crate::lifecycle::LifecycleState;

/// Invalid or unreadable configuration, detected before any subsystem exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window title must not be empty")]
    EmptyTitle,
    #[error("window size {width}x{height} is outside 1..={max}")]
    InvalidWindowSize { width: u32, height: u32, max: u32 },
    #[error("target frame rate must be at least 1")]
    ZeroFrameRate,
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A window, surface or GPU resource could not be acquired or kept alive.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("window creation: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("surface creation: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("device request: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("platform used before init")]
    NotInitialized,
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("initialization failed: {0}")]
    Initialization(#[source] PlatformError),
    #[error("loading game data failed: {0}")]
    DataLoad(#[source] GameError),
    #[error("runtime failure: {0}")]
    Runtime(#[from] RuntimeFailure),
    #[error("run() called on a game that is already {0:?}")]
    AlreadyRun(LifecycleState),
    #[error("options are locked once run() has started (state: {0:?})")]
    OptionsLocked(LifecycleState),
}

/// Unrecoverable error inside the main loop.
#[derive(Debug, Error)]
pub enum RuntimeFailure {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const MISUSE: i32 = 1;
    pub const CONFIGURATION: i32 = 2;
    pub const INITIALIZATION: i32 = 3;
    pub const DATA_LOAD: i32 = 4;
    pub const RUNTIME: i32 = 5;
}

impl EngineError {
    /// Non-zero process status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::Configuration(_) => exit_code::CONFIGURATION,
            EngineError::Initialization(_) => exit_code::INITIALIZATION,
            EngineError::DataLoad(_) => exit_code::DATA_LOAD,
            EngineError::Runtime(_) => exit_code::RUNTIME,
            EngineError::AlreadyRun(_) | EngineError::OptionsLocked(_) => exit_code::MISUSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_maps_to_non_zero() {
        let errors = [
            EngineError::from(ConfigError::EmptyTitle),
            EngineError::Initialization(PlatformError::NoAdapter),
            EngineError::DataLoad(GameError::msg("missing level")),
            EngineError::from(RuntimeFailure::from(PlatformError::OutOfMemory)),
            EngineError::AlreadyRun(LifecycleState::Terminated),
            EngineError::OptionsLocked(LifecycleState::Running),
        ];

        let codes: Vec<i32> = errors.iter().map(EngineError::exit_code).collect();
        assert_eq!(codes, vec![2, 3, 4, 5, 1, 1]);
    }

    #[test]
    fn messages_carry_the_cause() {
        let err = EngineError::DataLoad(GameError::msg("missing level"));
        assert_eq!(err.to_string(), "loading game data failed: missing level");
    }
}
