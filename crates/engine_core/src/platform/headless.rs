// crates/engine_core/src/platform/headless.rs

use tracing::debug;

use super::{FrameEvents, Platform};
use crate::config::EngineSettings;
use crate::error::PlatformError;

/// Window-less platform for tests and CI smoke runs.
/// Surfaces a quit request after a fixed number of pumped frames.
pub struct HeadlessPlatform {
    quit_after: Option<u64>,
    pumped: u64,
    rendered: u64,
    size: Option<(u32, u32)>,
}

impl HeadlessPlatform {
    /// Never requests quit on its own; the game has to return `LoopControl::Exit`.
    pub fn new() -> Self {
        Self {
            quit_after: None,
            pumped: 0,
            rendered: 0,
            size: None,
        }
    }

    /// Requests quit on pump number `frames` (0 quits on the first pump).
    pub fn quit_after(frames: u64) -> Self {
        Self {
            quit_after: Some(frames),
            ..Self::new()
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.rendered
    }

    pub fn is_initialized(&self) -> bool {
        self.size.is_some()
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for HeadlessPlatform {
    fn init(&mut self, settings: &EngineSettings) -> Result<(), PlatformError> {
        debug!(title = %settings.title, "Headless platform up");
        self.size = Some((settings.width, settings.height));
        Ok(())
    }

    fn surface_size(&self) -> (u32, u32) {
        self.size.unwrap_or((0, 0))
    }

    fn pump_events(&mut self) -> Result<FrameEvents, PlatformError> {
        if self.size.is_none() {
            return Err(PlatformError::NotInitialized);
        }
        let quit_requested = self.quit_after.is_some_and(|limit| self.pumped >= limit);
        self.pumped += 1;
        Ok(FrameEvents {
            quit_requested,
            resized: None,
        })
    }

    fn render(&mut self) -> Result<(), PlatformError> {
        if self.size.is_none() {
            return Err(PlatformError::NotInitialized);
        }
        self.rendered += 1;
        Ok(())
    }

    fn shutdown(&mut self) {
        if self.size.take().is_some() {
            debug!(frames = self.rendered, "Headless platform down");
        }
    }
}
