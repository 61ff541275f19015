use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use tracing::{debug, warn};
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
        }
    }

    fn render(
        &mut self,
        frame: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if !self.copy_frame(frame) {
            self.draw_placeholder();
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // First, render the pixels framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            // Upload new/changed egui textures
            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            // Update egui buffers (vertices, indices)
            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Render egui on top of pixels framebuffer
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // Keep pixels content
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            // Free textures no longer needed
            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");

        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");
    }
}

impl PixelsPresenter {
    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    /// Returns `false` when the frame was rasterized for a different size.
    fn copy_frame(&mut self, frame: &PixelBuffer) -> bool {
        let rect = frame.pixel_rect();
        if rect.width() != self.width || rect.height() != self.height {
            debug!(
                frame_width = rect.width(),
                frame_height = rect.height(),
                surface_width = self.width,
                surface_height = self.height,
                "stale frame skipped"
            );
            return false;
        }

        match copy_rgb_to_rgba(frame.buffer(), self.pixels.frame_mut()) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "frame could not be copied to the surface");
                false
            }
        }
    }
}
