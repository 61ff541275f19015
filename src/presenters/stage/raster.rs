use crate::core::data::colour::Colour;
use crate::core::data::element::ElementShape;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::presenters::stage::tween_stage::{StageElement, TweenStage};
use glam::Vec2;

pub const BACKGROUND: Colour = Colour::from_hex(0x1B1F2A);

const MIN_WORLD_WIDTH: f32 = 1.0;

/// Window onto the stage's x/y plane, seen from +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub centre: Vec2,
    pub world_width: f32,
}

impl Viewport {
    /// Smallest viewport showing every element with `margin` (a fraction of
    /// the content size) on each side. `None` for an empty stage.
    #[must_use]
    pub fn fit(stage: &TweenStage, rect: PixelRect, margin: f32) -> Option<Self> {
        let (min, max) = stage.elements().fold(None, |bounds, (_, element)| {
            let (low, high) = extent(element);
            Some(match bounds {
                None => (low, high),
                Some((min, max)) => (Vec2::min(min, low), Vec2::max(max, high)),
            })
        })?;

        let aspect = rect.width() as f32 / rect.height() as f32;
        let size = (max - min) * (1.0 + 2.0 * margin.max(0.0));
        let world_width = size.x.max(size.y * aspect).max(MIN_WORLD_WIDTH);

        Some(Self {
            centre: (min + max) / 2.0,
            world_width,
        })
    }

    fn to_pixel(&self, rect: PixelRect, world: Vec2) -> Vec2 {
        let width = rect.width() as f32;
        let height = rect.height() as f32;
        let scale = width / self.world_width;
        let offset = (world - self.centre) * scale;

        Vec2::new(
            rect.top_left().x as f32 + width / 2.0 + offset.x,
            rect.top_left().y as f32 + height / 2.0 - offset.y,
        )
    }
}

/// World-space x/y bounding box of an element.
fn extent(element: &StageElement) -> (Vec2, Vec2) {
    let half = match element.shape {
        ElementShape::Bar { width, height } => Vec2::new(width, height) / 2.0,
        ElementShape::Disk { radius, thickness } => Vec2::new(radius, thickness / 2.0),
        ElementShape::Agent { length } => Vec2::splat(length / 2.0),
    };
    let centre = element.position.truncate();

    (centre - half, centre + half)
}

/// Draws a side view of the stage, far elements first.
#[must_use]
pub fn rasterize(stage: &TweenStage, rect: PixelRect, viewport: Viewport) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(rect);
    buffer.fill(BACKGROUND);

    let mut elements: Vec<&StageElement> = stage.elements().map(|(_, element)| element).collect();
    elements.sort_by(|a, b| a.position.z.total_cmp(&b.position.z));

    for element in elements {
        let (low, high) = extent(element);
        let corner_a = viewport.to_pixel(rect, Vec2::new(low.x, high.y));
        let corner_b = viewport.to_pixel(rect, Vec2::new(high.x, low.y));

        let left = corner_a.x.round() as i32;
        let top = corner_a.y.round() as i32;
        let right = (corner_b.x.round() as i32 - 1).max(left);
        let bottom = (corner_b.y.round() as i32 - 1).max(top);

        buffer.fill_box(
            Point { x: left, y: top },
            Point {
                x: right,
                y: bottom,
            },
            element.colour,
        );
    }

    buffer
}
