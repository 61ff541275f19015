use crate::core::animator::{AdvanceReport, Beat, RunPhase, RunState, Script, StepRunner};
use crate::core::actions::cancellation::StopToken;
use crate::core::data::element::TransitionId;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::lifecycle::Visualizer;
use crate::core::ports::completion::CompletionPort;
use crate::core::ports::render_adapter::RenderAdapter;
use crate::core::puzzle::board::{PuzzleAction, TowerBoard};
use crate::core::puzzle::layout::TowerLayout;
use crate::core::puzzle::moves::{Move, Peg, compute_moves};
use crate::core::puzzle::tower::TowerState;
use crate::core::timing::StepTiming;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const START: Peg = Peg::Left;
const TARGET: Peg = Peg::Right;
const SPARE: Peg = Peg::Middle;

/// Replays the move list from `cursor`, one phase per move.
struct Replay<'a> {
    moves: &'a [Move],
    cursor: &'a mut usize,
    board: &'a mut TowerBoard,
    timing: &'a StepTiming,
}

impl Script for Replay<'_> {
    type Action = PuzzleAction;

    fn next_phase(&mut self) -> Option<Vec<Beat<PuzzleAction>>> {
        let &Move { from, to } = self.moves.get(*self.cursor)?;
        debug!(step = *self.cursor + 1, total = self.moves.len(), %from, %to, "disk move");
        *self.cursor += 1;

        Some(vec![
            Beat::Act(PuzzleAction::Raise {
                from,
                duration: self.timing.puzzle_lift,
            }),
            Beat::Await,
            Beat::Act(PuzzleAction::Carry {
                from,
                to,
                duration: self.timing.puzzle_translate,
            }),
            Beat::Await,
            Beat::Act(PuzzleAction::Lower {
                from,
                to,
                duration: self.timing.puzzle_lower,
            }),
            Beat::Await,
            Beat::Act(PuzzleAction::Transfer { from, to }),
            Beat::Dwell(self.timing.puzzle_pause),
        ])
    }

    fn perform(
        &mut self,
        action: PuzzleAction,
        adapter: &mut dyn RenderAdapter,
        started: &mut Vec<TransitionId>,
    ) {
        self.board.apply(action, adapter, started);
    }
}

/// The disk-transfer exhibit: moves every disk from the left peg to the
/// right one through the middle.
pub struct PuzzleDriver {
    moves: Vec<Move>,
    cursor: usize,
    board: TowerBoard,
    runner: StepRunner<PuzzleAction>,
    timing: StepTiming,
    visible: bool,
    completion: Option<Arc<dyn CompletionPort>>,
}

impl PuzzleDriver {
    #[must_use]
    pub fn new(disk_count: usize, layout: TowerLayout, timing: StepTiming) -> Self {
        Self {
            moves: compute_moves(disk_count, START, TARGET, SPARE),
            cursor: 0,
            board: TowerBoard::new(disk_count, START, layout),
            runner: StepRunner::new(),
            timing,
            visible: false,
            completion: None,
        }
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Index of the next move to replay.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn tower(&self) -> &TowerState {
        self.board.tower()
    }

    #[must_use]
    pub fn board(&self) -> &TowerBoard {
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

    fn rewind(&mut self, adapter: &mut dyn RenderAdapter) {
        self.stop(adapter);
        if let Some(port) = &self.completion {
            port.withdraw(ExhibitKind::DiskTransfer);
        }
        self.board.teardown(adapter);
        self.board.restore();
        self.moves = compute_moves(self.board.tower().disk_count(), START, TARGET, SPARE);
        self.cursor = 0;
        self.runner.reset();
    }
}

impl Visualizer for PuzzleDriver {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::DiskTransfer
    }

    fn show(&mut self, adapter: &mut dyn RenderAdapter) {
        if self.visible {
            return;
        }

        self.visible = true;
        self.board.build(adapter);
        info!(exhibit = %self.kind(), disks = self.tower().disk_count(), "exhibit shown");
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

        self.cursor = 0;
        info!(exhibit = %self.kind(), moves = self.moves.len(), "puzzle started");
        true
    }

    fn stop(&mut self, adapter: &mut dyn RenderAdapter) {
        self.board.halt(adapter);

        if self.runner.request_stop() {
            info!(exhibit = %self.kind(), completed_moves = self.cursor, "puzzle cancelled");
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

        let mut replay = Replay {
            moves: &self.moves,
            cursor: &mut self.cursor,
            board: &mut self.board,
            timing: &self.timing,
        };
        let report = self.runner.advance(elapsed, adapter, &mut replay);

        if report.completed {
            info!(exhibit = %self.kind(), moves = self.moves.len(), "puzzle completed");
            if let Some(port) = &self.completion {
                port.announce(ExhibitKind::DiskTransfer);
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
