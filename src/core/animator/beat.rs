use std::time::Duration;

/// One atomic step of a phase.
#[derive(Debug, Clone, PartialEq)]
pub enum Beat<A> {
    /// Side effect with no suspension. May start transitions.
    Act(A),
    /// Suspend for a fixed span of stepper time.
    Dwell(Duration),
    /// Suspend until every transition started since the last await finishes.
    Await,
}

impl<A> Beat<A> {
    #[must_use]
    pub fn is_suspension(&self) -> bool {
        !matches!(self, Self::Act(_))
    }
}
