#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimits {
    pub tick_hz: u32,
    pub max_ticks_per_frame: u32,
}

impl FrameLimits {
    #[must_use]
    pub fn dt(&self) -> f64 {
        if self.tick_hz == 0 {
            0.0
        } else {
            1.0 / f64::from(self.tick_hz)
        }
    }
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            max_ticks_per_frame: 10,
        }
    }
}
