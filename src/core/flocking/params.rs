use glam::Vec3;
use std::ops::RangeInclusive;

/// Population sizes accepted by the runtime population control.
pub const POPULATION_RANGE: RangeInclusive<usize> = 5..=50;

/// Boundary radii accepted by the runtime boundary control.
pub const BOUNDARY_RADIUS_RANGE: RangeInclusive<f32> = 2.0..=8.0;

/// Tuning of the flocking rules. Speeds and forces are per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlockParams {
    pub population: usize,
    pub max_speed: f32,
    pub max_force: f32,
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    /// Multiple of `max_force` the boundary pull is clamped to.
    pub boundary_force_scale: f32,
    pub damping: f32,
    /// Minimum speed for an agent's heading to follow its velocity.
    pub heading_threshold: f32,
    pub centre: Vec3,
    pub boundary_radius: f32,
    pub seed: u64,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            population: 60,
            max_speed: 0.05,
            max_force: 0.005,
            separation_radius: 0.3,
            alignment_radius: 0.8,
            cohesion_radius: 0.8,
            separation_weight: 1.8,
            alignment_weight: 1.0,
            cohesion_weight: 0.8,
            boundary_force_scale: 3.0,
            damping: 0.98,
            heading_threshold: 0.02,
            centre: Vec3::new(0.0, 3.5, 0.0),
            boundary_radius: 3.0,
            seed: 0x5EED_B01D,
        }
    }
}

impl FlockParams {
    /// Largest radius at which two agents still influence each other.
    #[must_use]
    pub fn interaction_radius(&self) -> f32 {
        self.separation_radius
            .max(self.alignment_radius)
            .max(self.cohesion_radius)
    }
}
