use egui::Context as EguiContext;
use winit::window::Window;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    fn new(window: &'static Window) -> Self;
    /// Draws `frame` under the egui overlay. A frame whose size does not
    /// match the surface is skipped.
    fn render(
        &mut self,
        frame: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
}
