use crate::core::animator::Beat;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::sorting::board::SortAction;
use crate::core::sorting::palette::Tone;
use crate::core::sorting::routine::{SortBeat, SortRoutine, mark_sorted, paint, paint_range};
use crate::core::timing::StepTiming;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Begin,
    Select,
    Inspect,
    Decide,
    Place,
    Finish,
    Done,
}

/// Lifts each key out of line and slides larger predecessors right under
/// it until its slot opens up.
///
/// The key travels with each shift as an adjacent swap, so values and
/// elements stay a permutation even while the key is in the air.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    stage: Stage,
    len: usize,
    next: usize,
    key_slot: usize,
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl InsertionSort {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Begin,
            len: 0,
            next: 1,
            key_slot: 1,
        }
    }
}

impl SortRoutine for InsertionSort {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::InsertionSort
    }

    fn restart(&mut self) {
        *self = Self::new();
    }

    fn next_phase(&mut self, values: &[i32], timing: &StepTiming) -> Option<Vec<SortBeat>> {
        loop {
            match self.stage {
                Stage::Begin => {
                    self.len = values.len();
                    self.stage = match self.len {
                        0 => Stage::Done,
                        1 => Stage::Finish,
                        _ => Stage::Select,
                    };
                }
                Stage::Select => {
                    let key = self.next;
                    self.key_slot = key;
                    self.stage = Stage::Inspect;

                    return Some(vec![
                        paint(key, Tone::Key),
                        Beat::Dwell(timing.pass_dwell),
                        Beat::Act(SortAction::Lift {
                            slot: key,
                            duration: timing.lift,
                        }),
                        Beat::Await,
                    ]);
                }
                Stage::Inspect => {
                    if self.key_slot == 0 {
                        self.stage = Stage::Place;
                        continue;
                    }
                    self.stage = Stage::Decide;

                    return Some(vec![
                        paint(self.key_slot - 1, Tone::Compare),
                        Beat::Dwell(timing.compare_dwell),
                    ]);
                }
                Stage::Decide => {
                    let slot = self.key_slot;
                    let predecessor = slot - 1;

                    if values[predecessor] > values[slot] {
                        self.key_slot = predecessor;
                        self.stage = Stage::Inspect;

                        return Some(vec![
                            Beat::Act(SortAction::Swap {
                                a: predecessor,
                                b: slot,
                            }),
                            Beat::Act(SortAction::Settle {
                                slot,
                                duration: timing.shift,
                            }),
                            Beat::Await,
                            paint(slot, Tone::Base),
                        ]);
                    }

                    self.stage = Stage::Place;
                    return Some(vec![paint(predecessor, Tone::Placed)]);
                }
                Stage::Place => {
                    let placed = self.next;
                    debug!(key = placed, slot = self.key_slot, "insertion key placed");

                    let mut beats = vec![
                        Beat::Act(SortAction::Settle {
                            slot: self.key_slot,
                            duration: timing.place,
                        }),
                        Beat::Await,
                    ];
                    beats.extend(paint_range(0..=placed, Tone::Placed));
                    beats.push(Beat::Dwell(timing.short_dwell));

                    self.next += 1;
                    self.stage = if self.next >= self.len {
                        Stage::Finish
                    } else {
                        Stage::Select
                    };

                    return Some(beats);
                }
                Stage::Finish => {
                    self.stage = Stage::Done;
                    return Some((0..self.len).map(mark_sorted).collect());
                }
                Stage::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sorting::test_support::{assert_sorts_every_permutation, run_routine};

    #[test]
    fn sorts_the_exhibit_input() {
        let outcome = run_routine(InsertionSort::new(), &[6, 2, 8, 4, 1, 9, 3, 7, 5]);

        assert_eq!(outcome.values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn sorts_every_permutation_of_six() {
        assert_sorts_every_permutation(InsertionSort::new, 6);
    }

    #[test]
    fn equal_keys_keep_their_order() {
        let outcome = run_routine(InsertionSort::new(), &[2, 1, 2, 1]);

        assert_eq!(outcome.values, vec![1, 1, 2, 2]);
        assert!(outcome.elements[0] < outcome.elements[1]);
        assert!(outcome.elements[2] < outcome.elements[3]);
    }

    #[test]
    fn sorted_marks_only_land_at_the_end() {
        let outcome = run_routine(InsertionSort::new(), &[3, 1, 2]);
        let first_mark = outcome
            .beats
            .iter()
            .position(|beat| matches!(beat, Beat::Act(SortAction::MarkSorted { .. })))
            .unwrap();

        assert!(
            outcome.beats[first_mark..]
                .iter()
                .all(|beat| matches!(beat, Beat::Act(SortAction::MarkSorted { .. })))
        );
    }
}
