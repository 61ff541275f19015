use crate::core::animator::Beat;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::sorting::board::SortAction;
use crate::core::sorting::palette::Tone;
use crate::core::timing::StepTiming;
use std::ops::RangeInclusive;

pub type SortBeat = Beat<SortAction>;

/// A sorting algorithm written as an explicit state machine.
///
/// `next_phase` is called only after the previous phase has played out, so
/// `values` always reflects every committed swap.
pub trait SortRoutine {
    fn kind(&self) -> ExhibitKind;

    /// Rewinds to the state before the first phase.
    fn restart(&mut self);

    fn next_phase(&mut self, values: &[i32], timing: &StepTiming) -> Option<Vec<SortBeat>>;
}

#[must_use]
pub fn paint(slot: usize, tone: Tone) -> SortBeat {
    Beat::Act(SortAction::Paint { slot, tone })
}

#[must_use]
pub fn mark_sorted(slot: usize) -> SortBeat {
    Beat::Act(SortAction::MarkSorted { slot })
}

pub fn paint_range(slots: RangeInclusive<usize>, tone: Tone) -> impl Iterator<Item = SortBeat> {
    slots.map(move |slot| paint(slot, tone))
}

/// Lift both, commit the swap, lower both into their new slots.
///
/// The logical swap lands between the two awaits, so a stop observed after
/// the lift leaves values and elements consistent.
#[must_use]
pub fn relocate(a: usize, b: usize, timing: &StepTiming) -> Vec<SortBeat> {
    if a == b {
        return Vec::new();
    }

    vec![
        Beat::Act(SortAction::Lift {
            slot: a,
            duration: timing.lift,
        }),
        Beat::Act(SortAction::Lift {
            slot: b,
            duration: timing.lift,
        }),
        Beat::Await,
        Beat::Act(SortAction::Swap { a, b }),
        Beat::Act(SortAction::Settle {
            slot: a,
            duration: timing.swap,
        }),
        Beat::Act(SortAction::Settle {
            slot: b,
            duration: timing.swap,
        }),
        Beat::Await,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relocate_commits_between_lift_and_lower() {
        let beats = relocate(1, 4, &StepTiming::default());
        let swap_at = beats
            .iter()
            .position(|beat| matches!(beat, Beat::Act(SortAction::Swap { .. })))
            .unwrap();

        assert_eq!(beats[swap_at - 1], Beat::Await);
        assert!(matches!(
            beats[swap_at + 1],
            Beat::Act(SortAction::Settle { slot: 1, .. })
        ));
        assert_eq!(beats.last(), Some(&Beat::Await));
    }

    #[test]
    fn relocate_to_self_is_empty() {
        assert!(relocate(2, 2, &StepTiming::default()).is_empty());
    }
}
