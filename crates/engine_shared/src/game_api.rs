// crates/engine_shared/src/game_api.rs
//! The contract between the engine and a concrete game.

use std::time::Duration;

use thiserror::Error;

use crate::assets::{AssetError, AssetManifest};
use crate::options::GameOptions;

// ==================================================================================
// 1. HOOK ERRORS
// ==================================================================================

/// Failure reported by a game hook. The engine decides what it means
/// (data-load failure during startup, runtime failure inside the loop).
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

impl GameError {
    pub fn msg(message: impl Into<String>) -> Self {
        GameError::Message(message.into())
    }
}

// ==================================================================================
// 2. HOOK CONTEXTS
// ==================================================================================

/// What the game can reach while its data loads: the options the engine was
/// started with (read-only) and the asset manifest.
pub struct LoadContext<'a> {
    options: &'a GameOptions,
    surface_size: (u32, u32),
    pub assets: &'a mut AssetManifest,
}

impl<'a> LoadContext<'a> {
    pub fn new(
        options: &'a GameOptions,
        surface_size: (u32, u32),
        assets: &'a mut AssetManifest,
    ) -> Self {
        Self {
            options,
            surface_size,
            assets,
        }
    }

    pub fn options(&self) -> &GameOptions {
        self.options
    }

    /// Size of the render surface in physical pixels, as created.
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }
}

/// Per-frame timing handed to `GameLogic::update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Zero-based frame counter.
    pub frame: u64,
    /// Clamped wall-clock delta since the previous frame, in seconds.
    pub dt: f32,
    /// Time since the loop started.
    pub elapsed: Duration,
}

/// Returned by `update` to keep the loop going or request a clean shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopControl {
    #[default]
    Continue,
    Exit,
}

// ==================================================================================
// 3. GAME LOGIC
// ==================================================================================

/// Implemented by each concrete game. Every hook has a default so a new
/// project only overrides what it needs.
pub trait GameLogic {
    /// Called once after the window, renderer and asset manifest exist and
    /// before the first frame. An error aborts the run.
    fn load_data(&mut self, _ctx: &mut LoadContext<'_>) -> Result<(), GameError> {
        Ok(())
    }

    /// Called once per frame with variable timing.
    fn update(&mut self, _frame: &FrameContext) -> Result<LoopControl, GameError> {
        Ok(LoopControl::Continue)
    }

    /// Called zero or more times per frame with a fixed step.
    fn fixed_update(&mut self, _dt: f32) -> Result<(), GameError> {
        Ok(())
    }

    /// First step of teardown, before engine subsystems are released.
    /// Runs only if `load_data` succeeded.
    fn on_unload(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;
    impl GameLogic for Stub {}

    #[test]
    fn default_hooks_are_no_ops() {
        let options = GameOptions::titled("Stub");
        let mut assets = AssetManifest::new("assets");
        let mut ctx = LoadContext::new(&options, (640, 480), &mut assets);

        let mut game = Stub;
        assert!(game.load_data(&mut ctx).is_ok());
        assert_eq!(ctx.options().title, "Stub");
        assert_eq!(ctx.surface_size(), (640, 480));

        let frame = FrameContext {
            frame: 0,
            dt: 1.0 / 60.0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(game.update(&frame).unwrap(), LoopControl::Continue);
        assert!(game.fixed_update(1.0 / 60.0).is_ok());
        assert!(assets.is_empty());
    }

    #[test]
    fn asset_errors_convert() {
        let err: GameError = AssetError::DuplicateName("ship".into()).into();
        assert_eq!(err.to_string(), "asset name 'ship' is already registered");
        assert_eq!(GameError::msg("boom").to_string(), "boom");
    }
}
