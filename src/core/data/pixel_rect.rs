use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be at least 2x2: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = i64::from(bottom_right.x) - i64::from(top_left.x);
        let dy = i64::from(bottom_right.y) - i64::from(top_left.y);

        let width = (dx + if dx >= 0 { 1 } else { -1 }) as i32;
        let height = (dy + if dy >= 0 { 1 } else { -1 }) as i32;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A rect anchored at the origin.
    pub fn with_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    /// Intersects an inclusive box with this rect, returning `None` when
    /// nothing of it is visible.
    #[must_use]
    pub fn clip(&self, top_left: Point, bottom_right: Point) -> Option<(Point, Point)> {
        let left = top_left.x.max(self.top_left.x);
        let top = top_left.y.max(self.top_left.y);
        let right = bottom_right.x.min(self.bottom_right.x);
        let bottom = bottom_right.y.min(self.bottom_right.y);

        if left > right || top > bottom {
            return None;
        }

        Some((Point { x: left, y: top }, Point { x: right, y: bottom }))
    }
}
