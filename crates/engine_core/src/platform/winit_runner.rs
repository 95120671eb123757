// crates/engine_core/src/platform/winit_runner.rs

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowBuilder};

use super::{FrameEvents, Platform};
use crate::config::EngineSettings;
use crate::error::PlatformError;
use crate::renderer::Renderer;

/// Owns the winit event loop, the window and the renderer.
/// The loop is pumped once per frame so `Game::run` keeps control of the
/// frame cycle instead of handing it to `EventLoop::run`.
///
/// winit allows one event loop per process. It is created on the first
/// `init` and kept across `shutdown`, so one platform can host several
/// games in sequence; a second `WinitPlatform` in the same process fails to
/// initialize.
pub struct WinitPlatform {
    event_loop: Option<EventLoop<()>>,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    exit_on_escape: bool,
    any_thread: bool,
}

impl WinitPlatform {
    /// Nothing is created until `init`.
    pub fn new() -> Self {
        Self {
            event_loop: None,
            window: None,
            renderer: None,
            exit_on_escape: false,
            any_thread: false,
        }
    }

    /// Allows the event loop to live off the main thread where the OS
    /// permits it (Linux, Windows). Ignored elsewhere.
    pub fn any_thread() -> Self {
        Self {
            any_thread: true,
            ..Self::new()
        }
    }

    pub fn has_event_loop(&self) -> bool {
        self.event_loop.is_some()
    }
}

#[allow(unused_mut, unused_variables)]
fn build_event_loop(any_thread: bool) -> Result<EventLoop<()>, PlatformError> {
    let mut builder = EventLoopBuilder::new();
    #[cfg(target_os = "linux")]
    {
        use winit::platform::x11::EventLoopBuilderExtX11;
        builder.with_any_thread(any_thread);
    }
    #[cfg(target_os = "windows")]
    {
        use winit::platform::windows::EventLoopBuilderExtWindows;
        builder.with_any_thread(any_thread);
    }
    Ok(builder.build()?)
}

impl Default for WinitPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for WinitPlatform {
    fn init(&mut self, settings: &EngineSettings) -> Result<(), PlatformError> {
        if self.event_loop.is_none() {
            self.event_loop = Some(build_event_loop(self.any_thread)?);
            debug!("Event loop created");
        }
        let event_loop = self.event_loop.as_ref().ok_or(PlatformError::NotInitialized)?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut builder = WindowBuilder::new()
            .with_title(&settings.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                settings.width as f64,
                settings.height as f64,
            ));
        if settings.fullscreen {
            builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = Arc::new(builder.build(event_loop)?);
        self.window = Some(window.clone());
        debug!(title = %settings.title, "Window created");

        let renderer = pollster::block_on(Renderer::new(
            window,
            settings.vsync,
            settings.clear_color,
        ))?;
        self.renderer = Some(renderer);
        self.exit_on_escape = settings.exit_on_escape;
        info!("Window and renderer ready");
        Ok(())
    }

    fn surface_size(&self) -> (u32, u32) {
        self.renderer
            .as_ref()
            .map(|r| (r.size().width, r.size().height))
            .unwrap_or((0, 0))
    }

    fn pump_events(&mut self) -> Result<FrameEvents, PlatformError> {
        if self.window.is_none() {
            return Err(PlatformError::NotInitialized);
        }
        let event_loop = self.event_loop.as_mut().ok_or(PlatformError::NotInitialized)?;
        let exit_on_escape = self.exit_on_escape;
        let mut events = FrameEvents::default();

        let status = event_loop.pump_events(Some(Duration::ZERO), |event, _elwt| {
            if let Event::WindowEvent { event, .. } = event {
                match event {
                    WindowEvent::CloseRequested => events.quit_requested = true,
                    WindowEvent::Resized(size) => events.resized = Some((size.width, size.height)),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(KeyCode::Escape),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } if exit_on_escape => events.quit_requested = true,
                    _ => {}
                }
            }
        });

        if let PumpStatus::Exit(code) = status {
            debug!(code, "Event loop exited");
            events.quit_requested = true;
        }

        if let (Some((width, height)), Some(renderer)) = (events.resized, self.renderer.as_mut()) {
            renderer.resize(winit::dpi::PhysicalSize::new(width, height));
        }

        Ok(events)
    }

    fn render(&mut self) -> Result<(), PlatformError> {
        let renderer = self.renderer.as_mut().ok_or(PlatformError::NotInitialized)?;
        if let Some(skip) = renderer.render()? {
            debug!(?skip, "Frame skipped");
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
        Ok(())
    }

    fn shutdown(&mut self) {
        // Reverse order of acquisition: renderer (holds the surface), then window.
        // The event loop stays for the next `init`.
        if self.renderer.take().is_some() {
            debug!("Renderer released");
        }
        if self.window.take().is_some() {
            debug!("Window closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use engine_shared::GameOptions;

    #[test]
    fn event_loop_is_reused_across_init_cycles() {
        let settings = config::validate(&GameOptions::titled("Twice")).unwrap();
        let mut platform = WinitPlatform::any_thread();

        let _ = platform.init(&settings);
        if !platform.has_event_loop() {
            // No display server on this machine.
            return;
        }
        platform.shutdown();
        assert!(platform.has_event_loop());
        assert!(matches!(platform.pump_events(), Err(PlatformError::NotInitialized)));

        let second = platform.init(&settings);
        assert!(!matches!(second, Err(PlatformError::EventLoop(_))));
        platform.shutdown();
        assert!(platform.has_event_loop());
    }
}
