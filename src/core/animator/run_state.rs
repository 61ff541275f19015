#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl RunPhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Snapshot of a driver's run flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunState {
    pub running: bool,
    pub stop_requested: bool,
}

/// What a single `advance` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceReport {
    pub state_changed: bool,
    /// Set on the call that observed natural completion.
    pub completed: bool,
    /// Set on the call that observed a stop request.
    pub cancelled: bool,
    /// Beats executed by a stepwise run, or integration ticks by the flock.
    pub ticks_run: u32,
}

impl AdvanceReport {
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            state_changed: self.state_changed || other.state_changed,
            completed: self.completed || other.completed,
            cancelled: self.cancelled || other.cancelled,
            ticks_run: self.ticks_run.saturating_add(other.ticks_run),
        }
    }
}
