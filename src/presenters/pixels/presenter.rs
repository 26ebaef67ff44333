use log::warn;

use crate::adapters::pixel_format::blit_placement;
use crate::controllers::interactive::ports::display::DisplayPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_rect::Placement;
use crate::core::data::viewport::Viewport;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

/// Shows viewer frames in a `pixels` framebuffer with an egui overlay on top.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    viewport: Viewport,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, viewport: Viewport) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(viewport.width(), viewport.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            window,
            pixels,
            egui_renderer,
            viewport,
        })
    }

    /// Draws the framebuffer, then the egui shapes over it.
    pub fn render(
        &mut self,
        shapes: Vec<egui::epaint::ClippedShape>,
        textures_delta: egui::TexturesDelta,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives = egui_ctx.tessellate(shapes, egui_ctx.pixels_per_point());
            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [size.width, size.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the framebuffer
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl DisplayPort for PixelsPresenter {
    fn present(&mut self, buffer: &PixelBuffer, placement: Option<Placement>) {
        if buffer.viewport() != self.viewport {
            warn!(
                "dropping {}x{} frame for {}x{} surface",
                buffer.viewport().width(),
                buffer.viewport().height(),
                self.viewport.width(),
                self.viewport.height()
            );
            return;
        }

        blit_placement(buffer, placement, self.pixels.frame_mut());
        self.window.request_redraw();
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}
