use glam::Vec3;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
}

impl Agent {
    #[must_use]
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec3::ZERO,
        }
    }

    /// Random agent in a 4 x 2 x 4 box around `centre`'s height. The initial
    /// velocity is biased towards negative axes.
    pub fn spawn<R: Rng>(rng: &mut R, centre: Vec3) -> Self {
        let position = Vec3::new(
            rng.gen_range(-2.0..2.0),
            centre.y + rng.gen_range(-1.0..1.0),
            rng.gen_range(-2.0..2.0),
        );
        let mut component = || (rng.r#gen::<f32>() - 0.8) * 0.3;
        let velocity = Vec3::new(component(), component(), component());

        Self::new(position, velocity)
    }

    /// Facing direction, or `None` while slower than `threshold`.
    #[must_use]
    pub fn heading(&self, threshold: f32) -> Option<Vec3> {
        (self.velocity.length() > threshold).then(|| self.velocity.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn spawned_agents_start_inside_the_spawn_box() {
        let mut rng = StdRng::seed_from_u64(7);
        let centre = Vec3::new(0.0, 3.5, 0.0);

        for _ in 0..200 {
            let agent = Agent::spawn(&mut rng, centre);

            assert!(agent.position.x.abs() <= 2.0);
            assert!(agent.position.z.abs() <= 2.0);
            assert!((agent.position.y - centre.y).abs() <= 1.0);
            assert!(agent.velocity.max_element() <= 0.06 + f32::EPSILON);
            assert!(agent.velocity.min_element() >= -0.24 - f32::EPSILON);
            assert_eq!(agent.acceleration, Vec3::ZERO);
        }
    }

    #[test]
    fn slow_agents_have_no_heading() {
        let agent = Agent::new(Vec3::ZERO, Vec3::new(0.01, 0.0, 0.0));

        assert_eq!(agent.heading(0.02), None);
    }

    #[test]
    fn heading_is_the_unit_velocity() {
        let agent = Agent::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.04));

        assert_eq!(agent.heading(0.02), Some(Vec3::NEG_Z));
    }
}
