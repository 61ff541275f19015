//! Gallery configuration loaded from TOML.
//!
//! Every section and field is optional; anything left out falls back to the
//! values the exhibits were designed around.

use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::flocking::limits::FrameLimits;
use crate::core::flocking::params::FlockParams;
use crate::core::timing::{SPEED_RANGE, StepTiming};
use glam::{Vec2, Vec3};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const SEQUENCE_LEN: std::ops::RangeInclusive<usize> = 2..=16;
const DISK_COUNT: std::ops::RangeInclusive<usize> = 1..=10;
const FLOCK_POPULATION: std::ops::RangeInclusive<usize> = 1..=200;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub timing: TimingConfig,
    pub sequences: SequenceConfig,
    pub puzzle: PuzzleConfig,
    pub flock: FlockConfig,
    pub frame: FrameConfig,
    pub gallery: LayoutConfig,
}

impl GalleryConfig {
    /// Reads, parses and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        self.sequences.validate()?;

        if !DISK_COUNT.contains(&self.puzzle.disk_count) {
            return Err(invalid(
                "puzzle.disk_count",
                format!("{} is outside 1..=10", self.puzzle.disk_count),
            ));
        }

        self.flock.validate()?;

        if self.frame.tick_hz == 0 {
            return Err(invalid("frame.tick_hz", "must be positive"));
        }
        if self.frame.max_ticks_per_frame == 0 {
            return Err(invalid("frame.max_ticks_per_frame", "must be positive"));
        }

        let extent = self.gallery.trigger_half_extent;
        if !extent.is_finite() || extent <= 0.0 {
            return Err(invalid("gallery.trigger_half_extent", "must be positive"));
        }

        Ok(())
    }

    #[must_use]
    pub fn step_timing(&self) -> StepTiming {
        self.timing.to_step_timing()
    }

    #[must_use]
    pub fn flock_params(&self) -> FlockParams {
        self.flock.to_params()
    }

    #[must_use]
    pub fn frame_limits(&self) -> FrameLimits {
        FrameLimits {
            tick_hz: self.frame.tick_hz,
            max_ticks_per_frame: self.frame.max_ticks_per_frame,
        }
    }
}

/// Presentation durations in milliseconds, all divided by `speed`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    pub speed: f64,
    pub compare_dwell: u64,
    pub short_dwell: u64,
    pub pass_dwell: u64,
    pub lift: u64,
    pub swap: u64,
    pub shift: u64,
    pub place: u64,
    pub puzzle_lift: u64,
    pub puzzle_translate: u64,
    pub puzzle_lower: u64,
    pub puzzle_pause: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let timing = StepTiming::default();
        let ms = |duration: Duration| u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);

        Self {
            speed: 1.0,
            compare_dwell: ms(timing.compare_dwell),
            short_dwell: ms(timing.short_dwell),
            pass_dwell: ms(timing.pass_dwell),
            lift: ms(timing.lift),
            swap: ms(timing.swap),
            shift: ms(timing.shift),
            place: ms(timing.place),
            puzzle_lift: ms(timing.puzzle_lift),
            puzzle_translate: ms(timing.puzzle_translate),
            puzzle_lower: ms(timing.puzzle_lower),
            puzzle_pause: ms(timing.puzzle_pause),
        }
    }
}

impl TimingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(invalid(
                "timing.speed",
                format!("{} is outside 0.01..=100", self.speed),
            ));
        }
        Ok(())
    }

    /// Durations as written, before `speed` is applied.
    #[must_use]
    pub fn base_timing(&self) -> StepTiming {
        StepTiming {
            compare_dwell: Duration::from_millis(self.compare_dwell),
            short_dwell: Duration::from_millis(self.short_dwell),
            pass_dwell: Duration::from_millis(self.pass_dwell),
            lift: Duration::from_millis(self.lift),
            swap: Duration::from_millis(self.swap),
            shift: Duration::from_millis(self.shift),
            place: Duration::from_millis(self.place),
            puzzle_lift: Duration::from_millis(self.puzzle_lift),
            puzzle_translate: Duration::from_millis(self.puzzle_translate),
            puzzle_lower: Duration::from_millis(self.puzzle_lower),
            puzzle_pause: Duration::from_millis(self.puzzle_pause),
        }
    }

    #[must_use]
    pub fn to_step_timing(&self) -> StepTiming {
        self.base_timing().scaled(self.speed)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceConfig {
    pub bubble: Vec<i32>,
    pub insertion: Vec<i32>,
    pub selection: Vec<i32>,
    pub quick: Vec<i32>,
    pub merge: Vec<i32>,
    pub heap: Vec<i32>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            bubble: vec![8, 3, 7, 1, 9, 2, 6, 4, 5],
            insertion: vec![6, 2, 8, 4, 1, 9, 3, 7, 5],
            selection: vec![4, 7, 2, 9, 1, 5, 8, 3, 6],
            quick: vec![7, 2, 9, 1, 8, 3, 6, 4, 5],
            merge: vec![5, 2, 8, 1, 9, 3, 7, 4, 6],
            heap: vec![3, 7, 1, 9, 4, 8, 2, 6, 5],
        }
    }
}

impl SequenceConfig {
    /// Input sequence of a sort exhibit; `None` for the other kinds.
    #[must_use]
    pub fn for_kind(&self, kind: ExhibitKind) -> Option<&[i32]> {
        match kind {
            ExhibitKind::BubbleSort => Some(self.bubble.as_slice()),
            ExhibitKind::InsertionSort => Some(self.insertion.as_slice()),
            ExhibitKind::SelectionSort => Some(self.selection.as_slice()),
            ExhibitKind::QuickSort => Some(self.quick.as_slice()),
            ExhibitKind::MergeSort => Some(self.merge.as_slice()),
            ExhibitKind::HeapSort => Some(self.heap.as_slice()),
            ExhibitKind::DiskTransfer | ExhibitKind::Flocking => None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("sequences.bubble", &self.bubble),
            ("sequences.insertion", &self.insertion),
            ("sequences.selection", &self.selection),
            ("sequences.quick", &self.quick),
            ("sequences.merge", &self.merge),
            ("sequences.heap", &self.heap),
        ];

        for (field, values) in named {
            if !SEQUENCE_LEN.contains(&values.len()) {
                return Err(invalid(
                    field,
                    format!("{} elements, expected 2..=16", values.len()),
                ));
            }
            if values.iter().any(|&value| value <= 0) {
                return Err(invalid(field, "values must be positive"));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    pub disk_count: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self { disk_count: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlockConfig {
    pub population: usize,
    pub max_speed: f32,
    pub max_force: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub boundary_force_scale: f32,
    pub damping: f32,
    pub heading_threshold: f32,
    pub centre: [f32; 3],
    pub boundary_radius: f32,
    pub seed: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        let params = FlockParams::default();

        Self {
            population: params.population,
            max_speed: params.max_speed,
            max_force: params.max_force,
            separation_radius: params.separation_radius,
            alignment_radius: params.alignment_radius,
            cohesion_radius: params.cohesion_radius,
            separation_weight: params.separation_weight,
            alignment_weight: params.alignment_weight,
            cohesion_weight: params.cohesion_weight,
            boundary_force_scale: params.boundary_force_scale,
            damping: params.damping,
            heading_threshold: params.heading_threshold,
            centre: params.centre.to_array(),
            boundary_radius: params.boundary_radius,
            seed: params.seed,
        }
    }
}

impl FlockConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !FLOCK_POPULATION.contains(&self.population) {
            return Err(invalid(
                "flock.population",
                format!("{} is outside 1..=200", self.population),
            ));
        }

        let positive = [
            ("flock.max_speed", self.max_speed),
            ("flock.max_force", self.max_force),
            ("flock.separation_radius", self.separation_radius),
            ("flock.alignment_radius", self.alignment_radius),
            ("flock.cohesion_radius", self.cohesion_radius),
            ("flock.boundary_radius", self.boundary_radius),
            ("flock.boundary_force_scale", self.boundary_force_scale),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a positive number"));
            }
        }

        let weights = [
            ("flock.separation_weight", self.separation_weight),
            ("flock.alignment_weight", self.alignment_weight),
            ("flock.cohesion_weight", self.cohesion_weight),
            ("flock.heading_threshold", self.heading_threshold),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be zero or positive"));
            }
        }

        if !self.damping.is_finite() || self.damping <= 0.0 || self.damping > 1.0 {
            return Err(invalid("flock.damping", "must be in (0, 1]"));
        }
        if !Vec3::from_array(self.centre).is_finite() {
            return Err(invalid("flock.centre", "must be finite"));
        }

        Ok(())
    }

    #[must_use]
    pub fn to_params(&self) -> FlockParams {
        FlockParams {
            population: self.population,
            max_speed: self.max_speed,
            max_force: self.max_force,
            separation_radius: self.separation_radius,
            alignment_radius: self.alignment_radius,
            cohesion_radius: self.cohesion_radius,
            separation_weight: self.separation_weight,
            alignment_weight: self.alignment_weight,
            cohesion_weight: self.cohesion_weight,
            boundary_force_scale: self.boundary_force_scale,
            damping: self.damping,
            heading_threshold: self.heading_threshold,
            centre: Vec3::from_array(self.centre),
            boundary_radius: self.boundary_radius,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameConfig {
    pub tick_hz: u32,
    pub max_ticks_per_frame: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        let limits = FrameLimits::default();

        Self {
            tick_hz: limits.tick_hz,
            max_ticks_per_frame: limits.max_ticks_per_frame,
        }
    }
}

/// Where the puzzle and the flock stand; the sort exhibits keep fixed places.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub trigger_half_extent: f32,
    pub puzzle_spot: [f32; 2],
    pub puzzle_anchor: [f32; 3],
    pub flock_spot: [f32; 2],
    pub flock_anchor: [f32; 3],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            trigger_half_extent: 1.5,
            puzzle_spot: [10.0, 0.0],
            puzzle_anchor: [10.0, -1.3, -3.0],
            flock_spot: [-10.0, 0.0],
            flock_anchor: [-10.0, -2.3, -3.0],
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn puzzle_spot(&self) -> Vec2 {
        Vec2::from_array(self.puzzle_spot)
    }

    #[must_use]
    pub fn puzzle_anchor(&self) -> Vec3 {
        Vec3::from_array(self.puzzle_anchor)
    }

    #[must_use]
    pub fn flock_spot(&self) -> Vec2 {
        Vec2::from_array(self.flock_spot)
    }

    #[must_use]
    pub fn flock_anchor(&self) -> Vec3 {
        Vec3::from_array(self.flock_anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = GalleryConfig::from_toml_str("").unwrap();

        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.step_timing(), StepTiming::default());
        assert_eq!(config.flock_params(), FlockParams::default());
        assert_eq!(config.frame_limits(), FrameLimits::default());
    }

    #[test]
    fn speed_scales_every_duration() {
        let config = GalleryConfig::from_toml_str(
            r#"
            [timing]
            speed = 2.0
            compare_dwell = 1000
            "#,
        )
        .unwrap();

        let timing = config.step_timing();

        assert_eq!(timing.compare_dwell, Duration::from_millis(500));
        assert_eq!(timing.puzzle_pause, Duration::from_millis(200));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = GalleryConfig::from_toml_str(
            r#"
            [sequences]
            bubble = [3, 1, 2]

            [flock]
            population = 20
            centre = [1.0, 2.0, 3.0]

            [puzzle]
            disk_count = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.sequences.for_kind(ExhibitKind::BubbleSort), Some(&[3, 1, 2][..]));
        assert_eq!(
            config.sequences.for_kind(ExhibitKind::HeapSort),
            Some(&[3, 7, 1, 9, 4, 8, 2, 6, 5][..])
        );
        assert_eq!(config.sequences.for_kind(ExhibitKind::Flocking), None);
        assert_eq!(config.flock_params().population, 20);
        assert_eq!(config.flock_params().centre, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.flock_params().max_speed, FlockParams::default().max_speed);
        assert_eq!(config.puzzle.disk_count, 6);
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let error = GalleryConfig::from_toml_str("[timing]\nspeed = 0.0").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "timing.speed",
                ..
            }
        ));
    }

    #[test]
    fn speed_outside_the_supported_range_is_rejected() {
        for text in ["[timing]\nspeed = 1e-20", "[timing]\nspeed = 1000.0"] {
            let error = GalleryConfig::from_toml_str(text).unwrap_err();

            assert!(matches!(
                error,
                ConfigError::Invalid {
                    field: "timing.speed",
                    ..
                }
            ));
        }
    }

    #[test]
    fn base_timing_ignores_speed() {
        let config = GalleryConfig::from_toml_str("[timing]\nspeed = 4.0").unwrap();

        assert_eq!(config.timing.base_timing(), StepTiming::default());
        assert_eq!(config.step_timing(), StepTiming::default().scaled(4.0));
    }

    #[test]
    fn sequence_length_is_bounded() {
        let error = GalleryConfig::from_toml_str("[sequences]\nquick = [1]").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "sequences.quick",
                ..
            }
        ));
    }

    #[test]
    fn disk_count_is_bounded() {
        let error = GalleryConfig::from_toml_str("[puzzle]\ndisk_count = 11").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "puzzle.disk_count",
                ..
            }
        ));
    }

    #[test]
    fn flock_damping_cannot_exceed_one() {
        let error = GalleryConfig::from_toml_str("[flock]\ndamping = 1.5").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "flock.damping",
                ..
            }
        ));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let error = GalleryConfig::from_toml_str("[frame]\ntick_hz = 0").unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid {
                field: "frame.tick_hz",
                ..
            }
        ));
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        let error = GalleryConfig::from_toml_str("[timing]\nsped = 2.0").unwrap_err();

        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = GalleryConfig::load("does/not/exist.toml").unwrap_err();

        assert!(matches!(error, ConfigError::Io(_)));
    }
}
