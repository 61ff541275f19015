use crate::core::actions::cancellation::StopToken;
use crate::core::actions::suspension::Suspension;
use crate::core::animator::beat::Beat;
use crate::core::animator::run_state::{AdvanceReport, RunPhase, RunState};
use crate::core::data::element::TransitionId;
use crate::core::ports::render_adapter::RenderAdapter;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::debug;

/// An algorithm expressed as a lazily generated series of phases.
///
/// Each phase is produced only after the previous one has fully played out,
/// so predicates inside `next_phase` always see the committed state.
pub trait Script {
    type Action;

    /// `None` once the algorithm has nothing left to do.
    fn next_phase(&mut self) -> Option<Vec<Beat<Self::Action>>>;

    /// Applies one action, pushing any transition it starts onto `started`.
    fn perform(
        &mut self,
        action: Self::Action,
        adapter: &mut dyn RenderAdapter,
        started: &mut Vec<TransitionId>,
    );
}

/// Drives a `Script` from an external stepper.
///
/// Between `advance` calls the run is always parked at a suspension point,
/// so a stop request is observed before any further beat executes.
pub struct StepRunner<A> {
    phase: RunPhase,
    token: StopToken,
    queue: VecDeque<Beat<A>>,
    in_flight: Vec<TransitionId>,
    suspension: Option<Suspension>,
    phases_played: u64,
}

impl<A> Default for StepRunner<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> StepRunner<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
            token: StopToken::new(),
            queue: VecDeque::new(),
            in_flight: Vec::new(),
            suspension: None,
            phases_played: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        RunState {
            running: self.is_running(),
            stop_requested: self.token.is_stop_requested(),
        }
    }

    /// Handle to the current run's stop flag.
    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.token.clone()
    }

    #[must_use]
    pub fn phases_played(&self) -> u64 {
        self.phases_played
    }

    /// Idle → Running. Any other phase makes this a no-op returning `false`.
    pub fn start(&mut self) -> bool {
        if self.phase != RunPhase::Idle {
            return false;
        }

        self.token = StopToken::new();
        self.abandon();
        self.phases_played = 0;
        self.phase = RunPhase::Running;

        true
    }

    /// Requests a stop and observes it immediately. Returns `true` when this
    /// call moved a running run to `Cancelled`.
    pub fn request_stop(&mut self) -> bool {
        self.token.request_stop();
        self.observe_stop()
    }

    /// Back to Idle with a fresh token; any old token holder sees a stop.
    pub fn reset(&mut self) {
        self.token.request_stop();
        self.token = StopToken::new();
        self.abandon();
        self.phase = RunPhase::Idle;
    }

    pub fn advance<S>(
        &mut self,
        elapsed: Duration,
        adapter: &mut dyn RenderAdapter,
        script: &mut S,
    ) -> AdvanceReport
    where
        S: Script<Action = A> + ?Sized,
    {
        let mut report = AdvanceReport::default();

        if self.phase != RunPhase::Running {
            return report;
        }

        let mut budget = elapsed;

        loop {
            if let Some(suspension) = self.suspension.as_mut() {
                if !suspension.resolve(&mut budget, adapter) {
                    return report;
                }
                self.suspension = None;
            }

            if self.observe_stop() {
                report.state_changed = true;
                report.cancelled = true;
                return report;
            }

            let Some(beat) = self.next_beat(script) else {
                if !self.in_flight.is_empty() {
                    self.suspension = Some(Suspension::Transitions(std::mem::take(
                        &mut self.in_flight,
                    )));
                    continue;
                }

                self.phase = RunPhase::Completed;
                report.state_changed = true;
                report.completed = true;
                debug!(phases = self.phases_played, "script finished");
                return report;
            };

            report.state_changed = true;
            report.ticks_run = report.ticks_run.saturating_add(1);

            match beat {
                Beat::Act(action) => script.perform(action, adapter, &mut self.in_flight),
                Beat::Dwell(duration) => self.suspension = Some(Suspension::dwell(duration)),
                Beat::Await => {
                    if !self.in_flight.is_empty() {
                        self.suspension = Some(Suspension::Transitions(std::mem::take(
                            &mut self.in_flight,
                        )));
                    }
                }
            }
        }
    }

    fn next_beat<S>(&mut self, script: &mut S) -> Option<Beat<A>>
    where
        S: Script<Action = A> + ?Sized,
    {
        loop {
            if let Some(beat) = self.queue.pop_front() {
                return Some(beat);
            }

            let phase = script.next_phase()?;
            self.phases_played += 1;
            self.queue.extend(phase);
        }
    }

    fn observe_stop(&mut self) -> bool {
        if self.phase == RunPhase::Running && self.token.is_stop_requested() {
            self.abandon();
            self.phase = RunPhase::Cancelled;
            return true;
        }

        false
    }

    fn abandon(&mut self) {
        self.queue.clear();
        self.in_flight.clear();
        self.suspension = None;
    }
}
