use std::ops::RangeInclusive;
use std::time::Duration;

/// Speed multipliers the gallery accepts.
pub const SPEED_RANGE: RangeInclusive<f64> = 0.01..=100.0;

/// Presentation durations for the stepwise drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTiming {
    /// Highlight held while two elements are compared.
    pub compare_dwell: Duration,
    /// Pause after a minor colour change.
    pub short_dwell: Duration,
    /// Pause between passes, partitions and merges.
    pub pass_dwell: Duration,
    pub lift: Duration,
    pub swap: Duration,
    pub shift: Duration,
    pub place: Duration,
    pub puzzle_lift: Duration,
    pub puzzle_translate: Duration,
    pub puzzle_lower: Duration,
    pub puzzle_pause: Duration,
}

impl Default for StepTiming {
    fn default() -> Self {
        Self {
            compare_dwell: Duration::from_millis(400),
            short_dwell: Duration::from_millis(200),
            pass_dwell: Duration::from_millis(600),
            lift: Duration::from_millis(300),
            swap: Duration::from_millis(500),
            shift: Duration::from_millis(400),
            place: Duration::from_millis(400),
            puzzle_lift: Duration::from_millis(300),
            puzzle_translate: Duration::from_millis(400),
            puzzle_lower: Duration::from_millis(300),
            puzzle_pause: Duration::from_millis(400),
        }
    }
}

impl StepTiming {
    /// Divides every duration by `speed`, saturating at `Duration::MAX`.
    /// Non-positive or non-finite speeds leave the timing unchanged.
    #[must_use]
    pub fn scaled(self, speed: f64) -> Self {
        if !speed.is_finite() || speed <= 0.0 || speed == 1.0 {
            return self;
        }

        let scale = |duration: Duration| {
            Duration::try_from_secs_f64(duration.as_secs_f64() / speed).unwrap_or(Duration::MAX)
        };

        Self {
            compare_dwell: scale(self.compare_dwell),
            short_dwell: scale(self.short_dwell),
            pass_dwell: scale(self.pass_dwell),
            lift: scale(self.lift),
            swap: scale(self.swap),
            shift: scale(self.shift),
            place: scale(self.place),
            puzzle_lift: scale(self.puzzle_lift),
            puzzle_translate: scale(self.puzzle_translate),
            puzzle_lower: scale(self.puzzle_lower),
            puzzle_pause: scale(self.puzzle_pause),
        }
    }

    /// All-zero timing; every dwell and transition resolves immediately.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            compare_dwell: Duration::ZERO,
            short_dwell: Duration::ZERO,
            pass_dwell: Duration::ZERO,
            lift: Duration::ZERO,
            swap: Duration::ZERO,
            shift: Duration::ZERO,
            place: Duration::ZERO,
            puzzle_lift: Duration::ZERO,
            puzzle_translate: Duration::ZERO,
            puzzle_lower: Duration::ZERO,
            puzzle_pause: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_divides_by_speed() {
        let timing = StepTiming::default().scaled(2.0);

        assert_eq!(timing.compare_dwell, Duration::from_millis(200));
        assert_eq!(timing.swap, Duration::from_millis(250));
        assert_eq!(timing.puzzle_pause, Duration::from_millis(200));
    }

    #[test]
    fn invalid_speed_is_ignored() {
        let timing = StepTiming::default();

        assert_eq!(timing.scaled(0.0), timing);
        assert_eq!(timing.scaled(-1.0), timing);
        assert_eq!(timing.scaled(f64::NAN), timing);
    }

    #[test]
    fn tiny_speed_saturates_instead_of_overflowing() {
        let timing = StepTiming::default().scaled(1e-20);

        assert_eq!(timing.compare_dwell, Duration::MAX);
        assert_eq!(StepTiming::instant().scaled(1e-20), StepTiming::instant());
    }
}
