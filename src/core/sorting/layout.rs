use glam::Vec3;

/// Where each bar of a sort exhibit rests, relative to the exhibit anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub anchor: Vec3,
    pub bar_width: f32,
    pub spacing: f32,
    pub max_height: f32,
    pub min_height: f32,
    pub lift_height: f32,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            anchor: Vec3::ZERO,
            bar_width: 0.3,
            spacing: 0.4,
            max_height: 2.0,
            min_height: 0.05,
            lift_height: 3.0,
        }
    }
}

impl BarLayout {
    #[must_use]
    pub fn at(anchor: Vec3) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    /// Bars scale linearly with `value / max_value`.
    #[must_use]
    pub fn bar_height(&self, value: i32, max_value: i32) -> f32 {
        if max_value <= 0 {
            return self.min_height;
        }

        (value as f32 / max_value as f32 * self.max_height).max(self.min_height)
    }

    /// Centre of a bar of `height` standing in `slot` out of `len` slots.
    #[must_use]
    pub fn rest_position(&self, slot: usize, len: usize, height: f32) -> Vec3 {
        let x = (slot as f32 - len as f32 / 2.0) * self.spacing;

        self.anchor + Vec3::new(x, height / 2.0, 0.0)
    }
}
