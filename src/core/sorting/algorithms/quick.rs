use crate::core::animator::Beat;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::sorting::board::SortAction;
use crate::core::sorting::palette::Tone;
use crate::core::sorting::routine::{
    SortBeat, SortRoutine, mark_sorted, paint, paint_range, relocate,
};
use crate::core::timing::StepTiming;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Begin,
    NextRange,
    ShowPivot,
    Inspect,
    Decide,
    PlacePivot,
    Finish,
    Done,
}

/// Lomuto partition state for the range being worked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Partition {
    low: usize,
    high: usize,
    /// Next slot an element smaller than the pivot is moved to.
    boundary: usize,
    cursor: usize,
}

/// Quicksort with the pivot at the end of each range. Pending ranges live
/// on an explicit stack instead of the call stack.
#[derive(Debug, Clone)]
pub struct QuickSort {
    stage: Stage,
    len: usize,
    pending: Vec<(usize, usize)>,
    partition: Partition,
}

impl Default for QuickSort {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickSort {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Begin,
            len: 0,
            pending: Vec::new(),
            partition: Partition::default(),
        }
    }
}

impl SortRoutine for QuickSort {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::QuickSort
    }

    fn restart(&mut self) {
        *self = Self::new();
    }

    fn next_phase(&mut self, values: &[i32], timing: &StepTiming) -> Option<Vec<SortBeat>> {
        loop {
            match self.stage {
                Stage::Begin => {
                    self.len = values.len();
                    if self.len > 0 {
                        self.pending.push((0, self.len - 1));
                    }
                    self.stage = Stage::NextRange;
                }
                Stage::NextRange => {
                    let Some((low, high)) = self.pending.pop() else {
                        self.stage = Stage::Finish;
                        continue;
                    };

                    if low == high {
                        return Some(vec![mark_sorted(low)]);
                    }

                    debug!(low, high, "partitioning range");
                    self.partition = Partition {
                        low,
                        high,
                        boundary: low,
                        cursor: low,
                    };
                    self.stage = Stage::ShowPivot;

                    let mut beats: Vec<SortBeat> = paint_range(low..=high, Tone::Focus).collect();
                    beats.push(Beat::Dwell(timing.pass_dwell));
                    return Some(beats);
                }
                Stage::ShowPivot => {
                    self.stage = Stage::Inspect;

                    return Some(vec![
                        paint(self.partition.high, Tone::Pivot),
                        Beat::Dwell(timing.compare_dwell),
                    ]);
                }
                Stage::Inspect => {
                    self.stage = Stage::Decide;

                    return Some(vec![
                        paint(self.partition.cursor, Tone::Compare),
                        Beat::Dwell(timing.compare_dwell),
                    ]);
                }
                Stage::Decide => {
                    let Partition {
                        high,
                        boundary,
                        cursor,
                        ..
                    } = self.partition;
                    let mut beats = Vec::new();

                    if values[cursor] < values[high] {
                        if boundary != cursor {
                            beats.push(paint(boundary, Tone::Swap));
                            beats.push(paint(cursor, Tone::Swap));
                            beats.push(Beat::Dwell(timing.short_dwell));
                            beats.extend(relocate(boundary, cursor, timing));
                            beats.push(paint(boundary, Tone::Focus));
                        }
                        self.partition.boundary += 1;
                    }
                    beats.push(paint(cursor, Tone::Focus));

                    self.partition.cursor += 1;
                    self.stage = if self.partition.cursor >= high {
                        Stage::PlacePivot
                    } else {
                        Stage::Inspect
                    };

                    return Some(beats);
                }
                Stage::PlacePivot => {
                    let Partition {
                        low,
                        high,
                        boundary,
                        ..
                    } = self.partition;
                    let mut beats = Vec::new();

                    if boundary != high {
                        beats.push(paint(boundary, Tone::Swap));
                        beats.push(paint(high, Tone::Swap));
                        beats.push(Beat::Dwell(timing.short_dwell));
                        beats.extend(relocate(boundary, high, timing));
                    }
                    beats.push(mark_sorted(boundary));
                    beats.push(Beat::Dwell(timing.compare_dwell));
                    beats.extend(paint_range(low..=high, Tone::Base));

                    if boundary < high {
                        self.pending.push((boundary + 1, high));
                    }
                    if boundary > low {
                        self.pending.push((low, boundary - 1));
                    }
                    self.stage = Stage::NextRange;

                    return Some(beats);
                }
                Stage::Finish => {
                    self.stage = Stage::Done;
                    let beats: Vec<SortBeat> = (0..self.len)
                        .map(|slot| Beat::Act(SortAction::MarkSorted { slot }))
                        .collect();
                    return Some(beats);
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
        let outcome = run_routine(QuickSort::new(), &[7, 2, 9, 1, 8, 3, 6, 4, 5]);

        assert_eq!(outcome.values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(outcome.sorted_mask.iter().all(|&mark| mark));
    }

    #[test]
    fn sorts_every_permutation_of_six() {
        assert_sorts_every_permutation(QuickSort::new, 6);
    }

    #[test]
    fn handles_duplicates_and_constant_input() {
        let outcome = run_routine(QuickSort::new(), &[3, 1, 3, 1, 3]);
        assert_eq!(outcome.values, vec![1, 1, 3, 3, 3]);

        let constant = run_routine(QuickSort::new(), &[4, 4, 4, 4]);
        assert_eq!(constant.values, vec![4, 4, 4, 4]);
    }

    #[test]
    fn pivot_lands_at_the_boundary_first() {
        let outcome = run_routine(QuickSort::new(), &[3, 1, 2]);
        let first_mark = outcome.beats.iter().find_map(|beat| match beat {
            Beat::Act(SortAction::MarkSorted { slot }) => Some(*slot),
            _ => None,
        });

        assert_eq!(first_mark, Some(1));
    }
}
