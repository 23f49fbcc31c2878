use winit::window::Window;

use crate::coords::{AspectRatio, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Window the frame is presented to.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window:       WindowCtx<'a>,
    pub gpu:          &'a mut Gpu<'w>,
    pub input:        &'a InputState,
    pub input_frame:  &'a InputFrame,
    pub time:         FrameTime,
    pub aspect:       AspectRatio,
    pub runtime:      &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Letterboxed viewport for the current surface size.
    pub fn viewport(&self) -> Viewport {
        let size = self.gpu.size();
        Viewport::letterbox(size.width, size.height, self.aspect)
    }

    /// Opens the frame's render pass, clearing the whole surface to `clear` and
    /// depth to 1.0, sets the letterboxed viewport, calls `draw`, then presents.
    ///
    /// `draw` is skipped while the viewport is empty (minimized window).
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return AppControl::Continue;
        }

        let viewport = self.viewport();

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // Pass and target borrow frame.encoder; both dropped before submit() takes frame.
        {
            let gpu: &Gpu<'w> = &*self.gpu;
            let attachments = gpu.attachments();

            // With MSAA the pass renders into the multisampled target and
            // resolves into the surface texture.
            let (color_view, resolve_target, color_store) = match &attachments.msaa_color {
                Some(msaa) => (msaa, Some(&frame.view), wgpu::StoreOp::Discard),
                None => (&frame.view, None, wgpu::StoreOp::Store),
            };

            let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("prism frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load:  wgpu::LoadOp::Clear(clear.into()),
                        store: color_store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &attachments.depth,
                    depth_ops: Some(wgpu::Operations {
                        load:  wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes:    None,
                occlusion_query_set: None,
                multiview_mask:      None,
            });

            if !viewport.is_empty() {
                pass.set_viewport(
                    viewport.x as f32,
                    viewport.y as f32,
                    viewport.width as f32,
                    viewport.height as f32,
                    0.0,
                    1.0,
                );

                let rctx = RenderCtx::new(
                    gpu.device(),
                    gpu.queue(),
                    gpu.surface_format(),
                    gpu.depth_format(),
                    gpu.sample_count(),
                );

                let mut target = RenderTarget::new(pass);
                draw(&rctx, &mut target);
            }
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
