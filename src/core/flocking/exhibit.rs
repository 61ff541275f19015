use crate::core::animator::AdvanceReport;
use crate::core::data::colour::Colour;
use crate::core::data::element::{ElementDescriptor, ElementId, ElementShape};
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::flocking::limits::FrameLimits;
use crate::core::flocking::params::{BOUNDARY_RADIUS_RANGE, FlockParams, POPULATION_RANGE};
use crate::core::flocking::simulator::FlockSimulator;
use crate::core::lifecycle::Visualizer;
use crate::core::ports::completion::CompletionPort;
use crate::core::ports::render_adapter::RenderAdapter;
use glam::Vec3;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const AGENT_COLOUR: Colour = Colour::from_hex(0x4ECDC4);
const AGENT_LENGTH: f32 = 0.08;

/// The flocking exhibit: a continuous simulation stepped at a fixed tick
/// rate from whatever frame times the host reports.
pub struct FlockExhibit {
    simulator: FlockSimulator,
    limits: FrameLimits,
    anchor: Vec3,
    elements: Vec<ElementId>,
    accumulator_secs: f64,
    visible: bool,
    running: bool,
    completion: Option<Arc<dyn CompletionPort>>,
}

impl FlockExhibit {
    #[must_use]
    pub fn new(params: FlockParams, limits: FrameLimits, anchor: Vec3) -> Self {
        Self {
            simulator: FlockSimulator::new(params),
            limits,
            anchor,
            elements: Vec::new(),
            accumulator_secs: 0.0,
            visible: false,
            running: false,
            completion: None,
        }
    }

    #[must_use]
    pub fn simulator(&self) -> &FlockSimulator {
        &self.simulator
    }

    /// Element of every agent, in agent order.
    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.simulator.params().population
    }

    #[must_use]
    pub fn boundary_radius(&self) -> f32 {
        self.simulator.params().boundary_radius
    }

    /// Clamped to 5..=50. Rebuilds the flock; a running simulation keeps
    /// running with the new population.
    pub fn set_population(&mut self, population: usize, adapter: &mut dyn RenderAdapter) {
        let clamped = population.clamp(*POPULATION_RANGE.start(), *POPULATION_RANGE.end());
        if clamped != population {
            warn!(requested = population, applied = clamped, "flock population clamped");
        }

        let params = FlockParams {
            population: clamped,
            ..*self.simulator.params()
        };
        self.simulator.set_params(params);
        self.simulator.respawn();

        if self.visible {
            self.teardown(adapter);
            self.build(adapter);
        }
    }

    /// Clamped to 2..=8; agents outside the new boundary are pulled back
    /// over the following ticks.
    pub fn set_boundary_radius(&mut self, radius: f32) {
        let clamped = if radius.is_finite() {
            radius.clamp(*BOUNDARY_RADIUS_RANGE.start(), *BOUNDARY_RADIUS_RANGE.end())
        } else {
            self.boundary_radius()
        };
        if clamped != radius {
            warn!(requested = radius, applied = clamped, "flock boundary radius clamped");
        }

        let params = FlockParams {
            boundary_radius: clamped,
            ..*self.simulator.params()
        };
        self.simulator.set_params(params);
    }

    fn build(&mut self, adapter: &mut dyn RenderAdapter) {
        if !self.elements.is_empty() {
            return;
        }

        let threshold = self.simulator.params().heading_threshold;
        self.elements = self
            .simulator
            .agents()
            .iter()
            .map(|agent| {
                let id = adapter.create_element(ElementDescriptor {
                    value: 0,
                    shape: ElementShape::Agent {
                        length: AGENT_LENGTH,
                    },
                    position: self.anchor + agent.position,
                    colour: AGENT_COLOUR,
                });
                adapter.place(id, self.anchor + agent.position, agent.heading(threshold));
                id
            })
            .collect();
    }

    fn teardown(&mut self, adapter: &mut dyn RenderAdapter) {
        for id in self.elements.drain(..) {
            adapter.destroy_element(id);
        }
    }

    fn rewind(&mut self, adapter: &mut dyn RenderAdapter) {
        self.stop(adapter);
        if let Some(port) = &self.completion {
            port.withdraw(ExhibitKind::Flocking);
        }
        self.simulator.respawn();
        self.accumulator_secs = 0.0;
    }

    fn sync_elements(&self, adapter: &mut dyn RenderAdapter) {
        let threshold = self.simulator.params().heading_threshold;

        for (&id, agent) in self.elements.iter().zip(self.simulator.agents()) {
            adapter.place(id, self.anchor + agent.position, agent.heading(threshold));
        }
    }
}

impl Visualizer for FlockExhibit {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::Flocking
    }

    fn show(&mut self, adapter: &mut dyn RenderAdapter) {
        if self.visible {
            return;
        }

        self.visible = true;
        self.build(adapter);
        info!(exhibit = %self.kind(), agents = self.elements.len(), "exhibit shown");
    }

    fn hide(&mut self, adapter: &mut dyn RenderAdapter) {
        if !self.visible {
            return;
        }

        self.rewind(adapter);
        self.teardown(adapter);
        self.visible = false;
        info!(exhibit = %self.kind(), "exhibit hidden");
    }

    fn start(&mut self) -> bool {
        if !self.visible {
            warn!(exhibit = %self.kind(), "start refused: exhibit is not visible");
            return false;
        }
        if self.running {
            return false;
        }

        self.running = true;
        self.accumulator_secs = 0.0;
        info!(exhibit = %self.kind(), agents = self.population(), "flock started");
        true
    }

    fn stop(&mut self, _adapter: &mut dyn RenderAdapter) {
        if self.running {
            self.running = false;
            info!(exhibit = %self.kind(), ticks = self.simulator.ticks(), "flock stopped");
        }
    }

    fn reset(&mut self, adapter: &mut dyn RenderAdapter) {
        self.rewind(adapter);

        if self.visible {
            self.teardown(adapter);
            self.build(adapter);
        }
    }

    fn advance(&mut self, elapsed: Duration, adapter: &mut dyn RenderAdapter) -> AdvanceReport {
        let dt = self.limits.dt();
        if !self.visible || !self.running || !dt.is_finite() || dt <= 0.0 {
            return AdvanceReport::default();
        }

        self.accumulator_secs += elapsed.as_secs_f64();
        if !self.accumulator_secs.is_finite() || self.accumulator_secs < 0.0 {
            self.accumulator_secs = 0.0;
        }

        let ticks_available = (self.accumulator_secs / dt).floor();
        let max_ticks = f64::from(self.limits.max_ticks_per_frame);
        let ticks_run = ticks_available.min(max_ticks) as u32;
        let dropped_excess = ticks_available > max_ticks;

        for _ in 0..ticks_run {
            self.simulator.step();
        }

        if dropped_excess {
            self.accumulator_secs = 0.0;
        } else {
            self.accumulator_secs -= f64::from(ticks_run) * dt;
            if self.accumulator_secs < 0.0 {
                self.accumulator_secs = 0.0;
            }
        }

        if ticks_run > 0 {
            self.sync_elements(adapter);
        }

        AdvanceReport {
            state_changed: ticks_run > 0,
            ticks_run,
            ..AdvanceReport::default()
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_running(&self) -> bool {
        self.running
    }

    /// The flock runs until stopped and never announces; the port only
    /// clears its marker on hide or reset.
    fn set_completion_port(&mut self, port: Arc<dyn CompletionPort>) {
        self.completion = Some(port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::mock_render_adapter::MockRenderAdapter;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPort {
        calls: Mutex<Vec<(&'static str, ExhibitKind)>>,
    }

    impl CompletionPort for RecordingPort {
        fn announce(&self, exhibit: ExhibitKind) {
            self.calls.lock().unwrap().push(("announce", exhibit));
        }

        fn withdraw(&self, exhibit: ExhibitKind) {
            self.calls.lock().unwrap().push(("withdraw", exhibit));
        }
    }

    const TICK: Duration = Duration::from_nanos(16_666_667);

    fn exhibit_with_limits(population: usize, limits: FrameLimits) -> FlockExhibit {
        FlockExhibit::new(
            FlockParams {
                population,
                ..FlockParams::default()
            },
            limits,
            Vec3::new(0.0, 0.0, -6.0),
        )
    }

    fn exhibit(population: usize) -> FlockExhibit {
        exhibit_with_limits(population, FrameLimits::default())
    }

    #[test]
    fn start_requires_a_visible_exhibit() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(10);

        assert!(!exhibit.start());

        exhibit.show(&mut adapter);
        assert!(exhibit.start());
        assert!(!exhibit.start());
        assert!(exhibit.is_running());
    }

    #[test]
    fn show_creates_one_element_per_agent() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(12);

        exhibit.show(&mut adapter);

        assert_eq!(adapter.live_elements().len(), 12);
        let first = exhibit.elements()[0];
        let agent = exhibit.simulator().agents()[0];
        assert_eq!(
            adapter.position_of(first),
            Some(Vec3::new(0.0, 0.0, -6.0) + agent.position)
        );
    }

    #[test]
    fn advance_runs_whole_ticks_and_carries_the_remainder() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit_with_limits(
            8,
            FrameLimits {
                tick_hz: 2,
                ..FrameLimits::default()
            },
        );
        exhibit.show(&mut adapter);
        exhibit.start();

        let first = exhibit.advance(Duration::from_millis(1_250), &mut adapter);
        let second = exhibit.advance(Duration::from_millis(250), &mut adapter);

        assert_eq!(first.ticks_run, 2);
        assert_eq!(second.ticks_run, 1);
        assert!(second.state_changed);
        assert!(!second.completed);
        assert_eq!(exhibit.simulator().ticks(), 3);
    }

    #[test]
    fn long_frames_drop_the_excess_ticks() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(8);
        exhibit.show(&mut adapter);
        exhibit.start();

        let report = exhibit.advance(Duration::from_secs(2), &mut adapter);
        let next = exhibit.advance(Duration::ZERO, &mut adapter);

        assert_eq!(report.ticks_run, 10);
        assert_eq!(next.ticks_run, 0);
    }

    #[test]
    fn elements_follow_their_agents() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(6);
        exhibit.show(&mut adapter);
        exhibit.start();

        exhibit.advance(TICK * 5, &mut adapter);

        for (&id, agent) in exhibit.elements().iter().zip(exhibit.simulator().agents()) {
            assert_eq!(
                adapter.position_of(id),
                Some(Vec3::new(0.0, 0.0, -6.0) + agent.position)
            );
        }
    }

    #[test]
    fn stopped_flock_does_not_move() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(6);
        exhibit.show(&mut adapter);
        exhibit.start();
        exhibit.advance(TICK, &mut adapter);

        exhibit.stop(&mut adapter);
        exhibit.stop(&mut adapter);
        let frozen = exhibit.simulator().agents().to_vec();
        let report = exhibit.advance(Duration::from_secs(1), &mut adapter);

        assert_eq!(report, AdvanceReport::default());
        assert_eq!(exhibit.simulator().agents(), frozen.as_slice());
    }

    #[test]
    fn population_is_clamped_and_rebuilt() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(10);
        exhibit.show(&mut adapter);

        exhibit.set_population(500, &mut adapter);
        assert_eq!(exhibit.population(), 50);
        assert_eq!(adapter.live_elements().len(), 50);

        exhibit.set_population(1, &mut adapter);
        assert_eq!(exhibit.population(), 5);
        assert_eq!(adapter.live_elements().len(), 5);
        assert_eq!(exhibit.simulator().agents().len(), 5);
    }

    #[test]
    fn boundary_radius_is_clamped() {
        let mut exhibit = exhibit(10);

        exhibit.set_boundary_radius(20.0);
        assert_eq!(exhibit.boundary_radius(), 8.0);

        exhibit.set_boundary_radius(0.5);
        assert_eq!(exhibit.boundary_radius(), 2.0);

        exhibit.set_boundary_radius(f32::NAN);
        assert_eq!(exhibit.boundary_radius(), 2.0);
    }

    #[test]
    fn hide_destroys_agents_and_respawns() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(10);
        let initial = exhibit.simulator().agents().to_vec();
        exhibit.show(&mut adapter);
        exhibit.start();
        exhibit.advance(TICK * 3, &mut adapter);

        exhibit.hide(&mut adapter);

        assert!(adapter.live_elements().is_empty());
        assert!(!exhibit.is_running());
        assert!(!exhibit.is_visible());
        assert_eq!(exhibit.simulator().agents(), initial.as_slice());
    }

    #[test]
    fn reset_keeps_the_flock_visible_and_idle() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(10);
        exhibit.show(&mut adapter);
        exhibit.start();
        exhibit.advance(TICK * 3, &mut adapter);

        exhibit.reset(&mut adapter);

        assert!(exhibit.is_visible());
        assert!(!exhibit.is_running());
        assert_eq!(adapter.live_elements().len(), 10);
        assert_eq!(exhibit.simulator().ticks(), 0);
        assert!(exhibit.start());
    }

    #[test]
    fn flock_only_ever_withdraws_its_marker() {
        let mut adapter = MockRenderAdapter::default();
        let mut exhibit = exhibit(10);
        let port = Arc::new(RecordingPort::default());
        exhibit.set_completion_port(port.clone());

        exhibit.show(&mut adapter);
        exhibit.start();
        let report = exhibit.advance(TICK * 600, &mut adapter);
        exhibit.reset(&mut adapter);

        assert!(!report.completed);
        let calls = port.calls.lock().unwrap();
        assert!(!calls.is_empty());
        assert!(calls.iter().all(|&call| call == ("withdraw", ExhibitKind::Flocking)));
    }
}
