use crate::core::flocking::agent::Agent;
use crate::core::flocking::params::FlockParams;
use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Individual contributions to one agent's acceleration, already clamped
/// but not yet weighted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    pub separation: Vec3,
    pub alignment: Vec3,
    pub cohesion: Vec3,
    pub boundary: Vec3,
}

impl Steering {
    /// Weighted flocking rules, without the boundary pull.
    #[must_use]
    pub fn flocking(&self, params: &FlockParams) -> Vec3 {
        self.separation * params.separation_weight
            + self.alignment * params.alignment_weight
            + self.cohesion * params.cohesion_weight
    }

    #[must_use]
    pub fn total(&self, params: &FlockParams) -> Vec3 {
        self.flocking(params) + self.boundary
    }
}

/// Steering for `agents[index]` against every other agent in `agents`.
#[must_use]
pub fn steering_for(agents: &[Agent], index: usize, params: &FlockParams) -> Steering {
    let Some(agent) = agents.get(index) else {
        return Steering::default();
    };

    let mut away = Vec3::ZERO;
    let mut separation_count = 0u32;
    let mut velocity_sum = Vec3::ZERO;
    let mut alignment_count = 0u32;
    let mut position_sum = Vec3::ZERO;
    let mut cohesion_count = 0u32;

    for other in agents {
        let distance = agent.position.distance(other.position);
        if distance <= 0.0 {
            continue;
        }

        if distance < params.separation_radius {
            away += (agent.position - other.position).normalize_or_zero() / distance;
            separation_count += 1;
        }
        if distance < params.alignment_radius {
            velocity_sum += other.velocity;
            alignment_count += 1;
        }
        if distance < params.cohesion_radius {
            position_sum += other.position;
            cohesion_count += 1;
        }
    }

    let steer = |direction: Vec3, limit: f32| {
        steer_towards(direction, agent.velocity, params.max_speed, limit)
    };

    let separation = if separation_count > 0 {
        steer(away / separation_count as f32, params.max_force)
    } else {
        Vec3::ZERO
    };
    let alignment = if alignment_count > 0 {
        steer(velocity_sum / alignment_count as f32, params.max_force)
    } else {
        Vec3::ZERO
    };
    let cohesion = if cohesion_count > 0 {
        let target = position_sum / cohesion_count as f32;
        steer(target - agent.position, params.max_force)
    } else {
        Vec3::ZERO
    };
    let boundary = if agent.position.distance(params.centre) > params.boundary_radius {
        steer(
            params.centre - agent.position,
            params.max_force * params.boundary_force_scale,
        )
    } else {
        Vec3::ZERO
    };

    Steering {
        separation,
        alignment,
        cohesion,
        boundary,
    }
}

/// Desired direction at full speed, minus the current velocity, clamped.
fn steer_towards(direction: Vec3, velocity: Vec3, max_speed: f32, limit: f32) -> Vec3 {
    let desired = direction.normalize_or_zero() * max_speed;

    (desired - velocity).clamp_length_max(limit)
}

/// Accelerations for every agent, computed one after another.
#[must_use]
pub fn compute_accelerations(agents: &[Agent], params: &FlockParams) -> Vec<Vec3> {
    (0..agents.len())
        .map(|index| steering_for(agents, index, params).total(params))
        .collect()
}

/// Same as [`compute_accelerations`], spread over rayon's pool.
#[must_use]
pub fn compute_accelerations_rayon(agents: &[Agent], params: &FlockParams) -> Vec<Vec3> {
    (0..agents.len())
        .into_par_iter()
        .map(|index| steering_for(agents, index, params).total(params))
        .collect()
}

/// Fixed-population flock. Every tick reads one snapshot of the flock, so
/// the result does not depend on agent order.
#[derive(Debug, Clone)]
pub struct FlockSimulator {
    agents: Vec<Agent>,
    params: FlockParams,
    ticks: u64,
}

impl FlockSimulator {
    #[must_use]
    pub fn new(params: FlockParams) -> Self {
        let mut simulator = Self {
            agents: Vec::new(),
            params,
            ticks: 0,
        };
        simulator.respawn();
        simulator
    }

    #[must_use]
    pub fn from_agents(agents: Vec<Agent>, params: FlockParams) -> Self {
        Self {
            agents,
            params,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn params(&self) -> &FlockParams {
        &self.params
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn steering(&self, index: usize) -> Steering {
        steering_for(&self.agents, index, &self.params)
    }

    /// Rebuilds the population from the configured seed.
    pub fn respawn(&mut self) {
        let mut rng = StdRng::seed_from_u64(self.params.seed);
        let centre = self.params.centre;

        self.agents = (0..self.params.population)
            .map(|_| Agent::spawn(&mut rng, centre))
            .collect();
        self.ticks = 0;
    }

    pub fn set_params(&mut self, params: FlockParams) {
        self.params = params;
    }

    /// One integration step over the whole flock.
    pub fn step(&mut self) {
        let accelerations = compute_accelerations_rayon(&self.agents, &self.params);

        for (agent, acceleration) in self.agents.iter_mut().zip(accelerations) {
            agent.acceleration += acceleration;
            integrate(agent, &self.params);
        }
        self.ticks += 1;
    }
}

fn integrate(agent: &mut Agent, params: &FlockParams) {
    agent.velocity += agent.acceleration;
    agent.velocity *= params.damping;
    agent.velocity = agent.velocity.clamp_length_max(params.max_speed);
    agent.position += agent.velocity;
    agent.acceleration = Vec3::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> FlockParams {
        FlockParams::default()
    }

    fn assert_vec_approx_eq(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-6),
            "actual={actual} expected={expected}"
        );
    }

    #[test]
    fn distant_agents_receive_no_flocking_force() {
        let params = params();
        let centre = params.centre;
        let agents = vec![
            Agent::new(centre + Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.01, 0.0, 0.0)),
            Agent::new(centre + Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.02, 0.0)),
        ];
        let mut simulator = FlockSimulator::from_agents(agents, params);

        for _ in 0..5 {
            for index in 0..2 {
                let steering = simulator.steering(index);
                assert_eq!(steering.flocking(&params), Vec3::ZERO);
                assert_eq!(steering.boundary, Vec3::ZERO);
            }
            simulator.step();
        }
    }

    #[test]
    fn close_agents_push_each_other_apart() {
        let params = params();
        let centre = params.centre;
        let agents = vec![
            Agent::new(centre, Vec3::ZERO),
            Agent::new(centre + Vec3::new(0.1, 0.0, 0.0), Vec3::ZERO),
        ];
        let simulator = FlockSimulator::from_agents(agents, params);

        let steering = simulator.steering(0);

        assert!(steering.separation.x < 0.0);
        assert!(steering.separation.length() <= params.max_force + 1e-7);
        assert!(steering.cohesion.x > 0.0);
    }

    #[test]
    fn coincident_agents_are_not_neighbours() {
        let params = params();
        let agents = vec![
            Agent::new(params.centre, Vec3::ZERO),
            Agent::new(params.centre, Vec3::ZERO),
        ];
        let simulator = FlockSimulator::from_agents(agents, params);

        assert_eq!(simulator.steering(0), Steering::default());
    }

    #[test]
    fn boundary_pulls_outside_agents_back_towards_the_centre() {
        let params = params();
        let agents = vec![Agent::new(
            params.centre + Vec3::new(5.0, 0.0, 0.0),
            Vec3::ZERO,
        )];
        let simulator = FlockSimulator::from_agents(agents, params);

        let boundary = simulator.steering(0).boundary;

        assert!(boundary.x < 0.0);
        assert!(boundary.length() <= params.max_force * params.boundary_force_scale + 1e-7);
        assert!(boundary.length() > params.max_force);
    }

    #[test]
    fn speed_never_exceeds_the_limit() {
        let mut simulator = FlockSimulator::new(params());

        for _ in 0..300 {
            simulator.step();
            for agent in simulator.agents() {
                assert!(agent.velocity.length() <= params().max_speed + 1e-6);
                assert_eq!(agent.acceleration, Vec3::ZERO);
            }
        }
        assert_eq!(simulator.ticks(), 300);
    }

    #[test]
    fn integration_applies_damping_then_moves() {
        let params = params();
        let mut agent = Agent::new(Vec3::ZERO, Vec3::new(0.01, 0.0, 0.0));
        agent.acceleration = Vec3::new(0.0, 0.01, 0.0);

        integrate(&mut agent, &params);

        assert_vec_approx_eq(agent.velocity, Vec3::new(0.0098, 0.0098, 0.0));
        assert_vec_approx_eq(agent.position, agent.velocity);
        assert_eq!(agent.acceleration, Vec3::ZERO);
    }

    #[test]
    fn rayon_accelerations_match_sequential() {
        let simulator = FlockSimulator::new(params());

        let sequential = compute_accelerations(simulator.agents(), simulator.params());
        let parallel = compute_accelerations_rayon(simulator.agents(), simulator.params());

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn update_is_independent_of_agent_order() {
        let params = params();
        let mut forward = FlockSimulator::new(params);
        let mut reversed_agents = forward.agents().to_vec();
        reversed_agents.reverse();
        let mut reversed = FlockSimulator::from_agents(reversed_agents, params);

        forward.step();
        reversed.step();

        for (a, b) in forward.agents().iter().zip(reversed.agents().iter().rev()) {
            assert_vec_approx_eq(a.position, b.position);
            assert_vec_approx_eq(a.velocity, b.velocity);
        }
    }

    #[test]
    fn respawn_is_deterministic_for_a_seed() {
        let mut simulator = FlockSimulator::new(params());
        let initial = simulator.agents().to_vec();

        for _ in 0..10 {
            simulator.step();
        }
        simulator.respawn();

        assert_eq!(simulator.agents(), initial.as_slice());
        assert_eq!(simulator.ticks(), 0);
    }
}
