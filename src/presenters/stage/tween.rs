use crate::core::data::element::{ElementId, TransitionId};
use glam::Vec3;
use std::time::Duration;

/// Easing curves for element transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Decelerating quadratic.
    Power2Out,
    /// Quadratic acceleration then deceleration.
    #[default]
    Power2InOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// One element travelling from `start` to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub id: TransitionId,
    pub element: ElementId,
    start: Vec3,
    target: Vec3,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(
        id: TransitionId,
        element: ElementId,
        start: Vec3,
        target: Vec3,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            id,
            element,
            start,
            target,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Moves time forward and returns the eased position. Snaps exactly to
    /// the target once complete.
    pub fn advance(&mut self, elapsed: Duration) -> Vec3 {
        self.elapsed = self.elapsed.saturating_add(elapsed).min(self.duration);

        if self.is_complete() {
            return self.target;
        }

        let progress = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.start.lerp(self.target, self.easing.apply(progress))
    }
}
