//! Helpers shared by the sort routine tests.

use crate::core::animator::Beat;
use crate::core::data::element::ElementId;
use crate::core::ports::mock_render_adapter::MockRenderAdapter;
use crate::core::sorting::board::{SortAction, SortBoard};
use crate::core::sorting::layout::BarLayout;
use crate::core::sorting::palette::Palette;
use crate::core::sorting::routine::{SortBeat, SortRoutine};
use crate::core::timing::StepTiming;

const MAX_PHASES: usize = 100_000;

pub struct RoutineOutcome {
    pub values: Vec<i32>,
    pub sorted_mask: Vec<bool>,
    pub beats: Vec<SortBeat>,
    /// Final slot order of the elements, which were created in input order.
    pub elements: Vec<ElementId>,
}

/// Plays a routine to the end against a board, checking after every phase
/// that each slot's element still carries that slot's value.
pub fn run_routine<R: SortRoutine>(mut routine: R, input: &[i32]) -> RoutineOutcome {
    let mut adapter = MockRenderAdapter::default();
    let mut board = SortBoard::new(input.to_vec(), BarLayout::default(), Palette::default());
    let timing = StepTiming::default();
    let mut beats = Vec::new();
    let mut started = Vec::new();

    board.build(&mut adapter);
    routine.restart();

    let mut phases = 0;
    while let Some(phase) = routine.next_phase(board.values(), &timing) {
        phases += 1;
        assert!(phases < MAX_PHASES, "routine did not terminate on {input:?}");

        for beat in phase {
            if let Beat::Act(action) = beat {
                board.apply(action, &mut adapter, &mut started);
            }
            beats.push(beat);
        }

        assert_associations_hold(&board, &adapter);
    }

    RoutineOutcome {
        values: board.values().to_vec(),
        sorted_mask: board.sorted_mask().to_vec(),
        beats,
        elements: board.slots().elements().to_vec(),
    }
}

pub fn assert_associations_hold(board: &SortBoard, adapter: &MockRenderAdapter) {
    assert!(board.slots().has_unique_entries());
    assert_eq!(board.slots().len(), board.len());

    for (slot, &value) in board.values().iter().enumerate() {
        let id = board.slots().get(slot).unwrap();
        let element = adapter.element(id).expect("slot refers to a live element");
        assert_eq!(element.descriptor.value, value, "slot {slot} lost its value");
    }
}

pub fn assert_sorts_every_permutation<R, F>(make: F, n: i32)
where
    R: SortRoutine,
    F: Fn() -> R,
{
    let base: Vec<i32> = (1..=n).collect();

    for input in permutations(&base) {
        let outcome = run_routine(make(), &input);

        assert_eq!(outcome.values, base, "failed on {input:?}");
        assert!(
            outcome.sorted_mask.iter().all(|&mark| mark),
            "not every slot marked sorted for {input:?}"
        );
    }
}

pub fn count_swaps(beats: &[SortBeat]) -> usize {
    beats
        .iter()
        .filter(|beat| matches!(beat, Beat::Act(SortAction::Swap { .. })))
        .count()
}

/// Every ordering of `items`, generated with Heap's algorithm.
pub fn permutations(items: &[i32]) -> Vec<Vec<i32>> {
    let mut current = items.to_vec();
    let mut counters = vec![0usize; current.len()];
    let mut result = vec![current.clone()];
    let mut i = 1;

    while i < current.len() {
        if counters[i] < i {
            if i % 2 == 0 {
                current.swap(0, i);
            } else {
                current.swap(counters[i], i);
            }
            result.push(current.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn permutations_covers_every_ordering_once() {
        let all = permutations(&[1, 2, 3, 4]);
        let unique: HashSet<Vec<i32>> = all.iter().cloned().collect();

        assert_eq!(all.len(), 24);
        assert_eq!(unique.len(), 24);
    }
}
