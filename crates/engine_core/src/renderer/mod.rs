// crates/engine_core/src/renderer/mod.rs
pub mod context;

use std::sync::Arc;

use glam::Vec4;
use tracing::warn;
use winit::window::Window;

use self::context::GraphicsContext;
use crate::error::PlatformError;

/// Outcome of a frame that did not reach the screen but is not fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSkip {
    /// Swapchain was lost or outdated and has been reconfigured.
    Reconfigured,
    Timeout,
}

pub struct Renderer {
    ctx: GraphicsContext,
    clear_color: wgpu::Color,
}

impl Renderer {
    pub async fn new(
        window: Arc<Window>,
        vsync: bool,
        clear_color: Vec4,
    ) -> Result<Self, PlatformError> {
        let ctx = GraphicsContext::new(window, vsync).await?;
        Ok(Self {
            ctx,
            clear_color: wgpu::Color {
                r: clear_color.x as f64,
                g: clear_color.y as f64,
                b: clear_color.z as f64,
                a: clear_color.w as f64,
            },
        })
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.ctx.size
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    /// Clears the backbuffer and presents it. Surface loss and timeouts skip
    /// the frame; running out of memory is fatal.
    pub fn render(&mut self) -> Result<Option<FrameSkip>, PlatformError> {
        let output = match self.ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost/outdated. Reconfiguring swapchain.");
                self.ctx.resize(self.ctx.size);
                return Ok(Some(FrameSkip::Reconfigured));
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Surface timeout. Skipping this frame.");
                return Ok(Some(FrameSkip::Timeout));
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(PlatformError::OutOfMemory),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.ctx.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        {
            let _clear_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(None)
    }
}
