use crate::core::animator::{AdvanceReport, RunPhase, RunState, Script, StepRunner};
use crate::core::actions::cancellation::StopToken;
use crate::core::data::element::TransitionId;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::lifecycle::Visualizer;
use crate::core::ports::completion::CompletionPort;
use crate::core::ports::render_adapter::RenderAdapter;
use crate::core::sorting::board::{SortAction, SortBoard};
use crate::core::sorting::layout::BarLayout;
use crate::core::sorting::palette::Palette;
use crate::core::sorting::routine::{SortBeat, SortRoutine};
use crate::core::timing::StepTiming;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Binds a routine to the board it mutates for the length of one advance.
struct Playback<'a, R> {
    routine: &'a mut R,
    board: &'a mut SortBoard,
    timing: &'a StepTiming,
}

impl<R: SortRoutine> Script for Playback<'_, R> {
    type Action = SortAction;

    fn next_phase(&mut self) -> Option<Vec<SortBeat>> {
        self.routine.next_phase(self.board.values(), self.timing)
    }

    fn perform(
        &mut self,
        action: SortAction,
        adapter: &mut dyn RenderAdapter,
        started: &mut Vec<TransitionId>,
    ) {
        self.board.apply(action, adapter, started);
    }
}

/// One sort exhibit: a routine, its board and the run lifecycle around them.
pub struct SortDriver<R: SortRoutine> {
    routine: R,
    board: SortBoard,
    runner: StepRunner<SortAction>,
    timing: StepTiming,
    visible: bool,
    completion: Option<Arc<dyn CompletionPort>>,
}

impl<R: SortRoutine> SortDriver<R> {
    #[must_use]
    pub fn new(routine: R, values: Vec<i32>, layout: BarLayout, timing: StepTiming) -> Self {
        let palette = Palette::for_exhibit(routine.kind());

        Self {
            routine,
            board: SortBoard::new(values, layout, palette),
            runner: StepRunner::new(),
            timing,
            visible: false,
            completion: None,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[i32] {
        self.board.values()
    }

    #[must_use]
    pub fn original(&self) -> &[i32] {
        self.board.original()
    }

    #[must_use]
    pub fn board(&self) -> &SortBoard {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.runner.phase()
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.runner.run_state()
    }

    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.runner.stop_token()
    }

    fn withdraw_marker(&self) {
        if let Some(port) = &self.completion {
            port.withdraw(self.routine.kind());
        }
    }

    fn rewind(&mut self, adapter: &mut dyn RenderAdapter) {
        self.stop(adapter);
        self.withdraw_marker();
        self.board.teardown(adapter);
        self.board.restore();
        self.runner.reset();
        self.routine.restart();
    }
}

impl<R: SortRoutine> Visualizer for SortDriver<R> {
    fn kind(&self) -> ExhibitKind {
        self.routine.kind()
    }

    fn show(&mut self, adapter: &mut dyn RenderAdapter) {
        if self.visible {
            return;
        }

        self.visible = true;
        self.board.build(adapter);
        info!(exhibit = %self.kind(), elements = self.board.len(), "exhibit shown");
    }

    fn hide(&mut self, adapter: &mut dyn RenderAdapter) {
        if !self.visible {
            return;
        }

        self.rewind(adapter);
        self.visible = false;
        info!(exhibit = %self.kind(), "exhibit hidden");
    }

    fn start(&mut self) -> bool {
        if !self.visible {
            warn!(exhibit = %self.kind(), "start refused: exhibit is not visible");
            return false;
        }
        if !self.runner.start() {
            return false;
        }

        self.routine.restart();
        info!(exhibit = %self.kind(), input = ?self.board.values(), "sort started");
        true
    }

    fn stop(&mut self, adapter: &mut dyn RenderAdapter) {
        self.board.halt(adapter);

        if self.runner.request_stop() {
            info!(exhibit = %self.kind(), values = ?self.board.values(), "sort cancelled");
        }
    }

    fn reset(&mut self, adapter: &mut dyn RenderAdapter) {
        self.rewind(adapter);

        if self.visible {
            self.board.build(adapter);
        }
    }

    fn advance(&mut self, elapsed: Duration, adapter: &mut dyn RenderAdapter) -> AdvanceReport {
        if !self.visible {
            return AdvanceReport::default();
        }

        let mut playback = Playback {
            routine: &mut self.routine,
            board: &mut self.board,
            timing: &self.timing,
        };
        let report = self.runner.advance(elapsed, adapter, &mut playback);

        if report.completed {
            if !self.board.is_sorted() {
                warn!(exhibit = %self.kind(), values = ?self.board.values(), "run ended unsorted");
            }
            info!(exhibit = %self.kind(), values = ?self.board.values(), "sort completed");
            if let Some(port) = &self.completion {
                port.announce(self.routine.kind());
            }
        }

        report
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    fn set_completion_port(&mut self, port: Arc<dyn CompletionPort>) {
        self.completion = Some(port);
    }

    fn set_timing(&mut self, timing: StepTiming) {
        self.timing = timing;
    }
}
