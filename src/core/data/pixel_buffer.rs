use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    (pixel_rect.width() * pixel_rect.height() * 3) as usize
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB frame covering a `PixelRect`.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let index = self.index_of(pixel);

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn fill(&mut self, colour: Colour) {
        for chunk in self.buffer.chunks_exact_mut(3) {
            chunk[0] = colour.r;
            chunk[1] = colour.g;
            chunk[2] = colour.b;
        }
    }

    /// Paints the inclusive box, silently dropping the part outside the rect.
    pub fn fill_box(&mut self, top_left: Point, bottom_right: Point, colour: Colour) {
        let Some((from, to)) = self.pixel_rect.clip(top_left, bottom_right) else {
            return;
        };

        for y in from.y..=to.y {
            for x in from.x..=to.x {
                let index = self.index_of(Point { x, y });
                self.write(index, colour);
            }
        }
    }

    fn index_of(&self, pixel: Point) -> usize {
        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as u32;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as u32;

        ((relative_y * self.pixel_rect.width() + relative_x) * 3) as usize
    }

    fn write(&mut self, index: usize, colour: Colour) {
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
    }
}
