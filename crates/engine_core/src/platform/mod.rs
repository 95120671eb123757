// crates/engine_core/src/platform/mod.rs
//! OS-facing subsystems (window, event pump, renderer) behind one seam, so the
//! lifecycle in `Game::run` can be driven by a real window or headless.

pub mod headless;
pub mod winit_runner;

pub use headless::HeadlessPlatform;
pub use winit_runner::WinitPlatform;

use crate::config::EngineSettings;
use crate::error::PlatformError;

/// What the platform observed since the previous pump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub quit_requested: bool,
    /// Latest surface size in physical pixels, if it changed.
    pub resized: Option<(u32, u32)>,
}

pub trait Platform {
    /// Acquire window, surface and renderer from validated settings.
    /// On error the platform may hold partial state; `shutdown` releases it.
    fn init(&mut self, settings: &EngineSettings) -> Result<(), PlatformError>;

    /// Current render surface size in physical pixels.
    fn surface_size(&self) -> (u32, u32);

    /// Drain pending OS events without blocking.
    fn pump_events(&mut self) -> Result<FrameEvents, PlatformError>;

    fn render(&mut self) -> Result<(), PlatformError>;

    /// Release everything in reverse order of acquisition. Idempotent.
    fn shutdown(&mut self);
}
