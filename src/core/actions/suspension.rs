use crate::core::data::element::TransitionId;
use crate::core::ports::render_adapter::RenderAdapter;
use std::time::Duration;

/// A point where a run hands control back to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suspension {
    /// Wait for a span of stepper time.
    Dwell { remaining: Duration },
    /// Wait until every listed transition reports finished.
    Transitions(Vec<TransitionId>),
}

impl Suspension {
    #[must_use]
    pub fn dwell(duration: Duration) -> Self {
        Self::Dwell {
            remaining: duration,
        }
    }

    /// Spends as much of `budget` as this suspension needs and reports
    /// whether it has resolved.
    ///
    /// A dwell consumes budget; waiting on transitions does not, since the
    /// adapter advances on its own clock.
    pub fn resolve(&mut self, budget: &mut Duration, adapter: &dyn RenderAdapter) -> bool {
        match self {
            Self::Dwell { remaining } => {
                if *budget >= *remaining {
                    *budget -= *remaining;
                    *remaining = Duration::ZERO;
                    true
                } else {
                    *remaining -= *budget;
                    *budget = Duration::ZERO;
                    false
                }
            }
            Self::Transitions(pending) => {
                pending.retain(|&id| !adapter.is_finished(id));
                pending.is_empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::mock_render_adapter::MockRenderAdapter;

    #[test]
    fn dwell_consumes_budget_until_resolved() {
        let adapter = MockRenderAdapter::default();
        let mut suspension = Suspension::dwell(Duration::from_millis(300));
        let mut budget = Duration::from_millis(200);

        assert!(!suspension.resolve(&mut budget, &adapter));
        assert_eq!(budget, Duration::ZERO);
        assert_eq!(
            suspension,
            Suspension::Dwell {
                remaining: Duration::from_millis(100)
            }
        );

        let mut budget = Duration::from_millis(250);
        assert!(suspension.resolve(&mut budget, &adapter));
        assert_eq!(budget, Duration::from_millis(150));
    }

    #[test]
    fn zero_dwell_resolves_without_budget() {
        let adapter = MockRenderAdapter::default();
        let mut suspension = Suspension::dwell(Duration::ZERO);
        let mut budget = Duration::ZERO;

        assert!(suspension.resolve(&mut budget, &adapter));
    }

    #[test]
    fn transitions_resolve_once_adapter_reports_finished() {
        let adapter = MockRenderAdapter::holding_transitions();
        let mut suspension = Suspension::Transitions(vec![TransitionId(1), TransitionId(2)]);
        let mut budget = Duration::from_secs(1);

        assert!(!suspension.resolve(&mut budget, &adapter));
        assert_eq!(budget, Duration::from_secs(1));

        adapter.finish(TransitionId(1));
        assert!(!suspension.resolve(&mut budget, &adapter));
        assert_eq!(suspension, Suspension::Transitions(vec![TransitionId(2)]));

        adapter.finish(TransitionId(2));
        assert!(suspension.resolve(&mut budget, &adapter));
    }
}
