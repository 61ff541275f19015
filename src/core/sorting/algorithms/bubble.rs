use crate::core::animator::Beat;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::sorting::palette::Tone;
use crate::core::sorting::routine::{SortBeat, SortRoutine, mark_sorted, paint, relocate};
use crate::core::timing::StepTiming;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Begin,
    Inspect,
    Decide,
    EndPass,
    Finish,
    Done,
}

/// Adjacent compare-and-swap passes; each pass settles the largest
/// remaining value at the end.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    stage: Stage,
    len: usize,
    pass: usize,
    cursor: usize,
}

impl Default for BubbleSort {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleSort {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Begin,
            len: 0,
            pass: 0,
            cursor: 0,
        }
    }
}

impl SortRoutine for BubbleSort {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::BubbleSort
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
                        _ => Stage::Inspect,
                    };
                }
                Stage::Inspect => {
                    let j = self.cursor;
                    self.stage = Stage::Decide;

                    return Some(vec![
                        paint(j, Tone::Compare),
                        paint(j + 1, Tone::Compare),
                        Beat::Dwell(timing.compare_dwell),
                    ]);
                }
                Stage::Decide => {
                    let j = self.cursor;
                    let mut beats = Vec::new();

                    if values[j] > values[j + 1] {
                        beats.push(paint(j, Tone::Swap));
                        beats.push(paint(j + 1, Tone::Swap));
                        beats.extend(relocate(j, j + 1, timing));
                    }
                    beats.push(paint(j, Tone::Base));
                    beats.push(paint(j + 1, Tone::Base));

                    self.cursor += 1;
                    self.stage = if self.cursor >= self.len - 1 - self.pass {
                        Stage::EndPass
                    } else {
                        Stage::Inspect
                    };

                    return Some(beats);
                }
                Stage::EndPass => {
                    let settled = self.len - 1 - self.pass;
                    debug!(pass = self.pass, settled, "bubble pass finished");

                    self.pass += 1;
                    self.cursor = 0;
                    self.stage = if self.pass >= self.len - 1 {
                        Stage::Finish
                    } else {
                        Stage::Inspect
                    };

                    return Some(vec![mark_sorted(settled), Beat::Dwell(timing.short_dwell)]);
                }
                Stage::Finish => {
                    self.stage = Stage::Done;
                    return Some(vec![mark_sorted(0)]);
                }
                Stage::Done => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sorting::test_support::{
        assert_sorts_every_permutation, count_swaps, run_routine,
    };

    #[test]
    fn sorts_the_exhibit_input() {
        let outcome = run_routine(BubbleSort::new(), &[8, 3, 7, 1, 9, 2, 6, 4, 5]);

        assert_eq!(outcome.values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(outcome.sorted_mask.iter().all(|&mark| mark));
    }

    #[test]
    fn sorts_every_permutation_of_six() {
        assert_sorts_every_permutation(BubbleSort::new, 6);
    }

    #[test]
    fn sorted_input_needs_no_swaps() {
        let outcome = run_routine(BubbleSort::new(), &[1, 2, 3, 4]);

        assert_eq!(count_swaps(&outcome.beats), 0);
    }

    #[test]
    fn reversed_input_swaps_every_pair() {
        let outcome = run_routine(BubbleSort::new(), &[4, 3, 2, 1]);

        assert_eq!(count_swaps(&outcome.beats), 6);
    }

    #[test]
    fn tiny_inputs_finish_cleanly() {
        assert!(run_routine(BubbleSort::new(), &[]).values.is_empty());

        let single = run_routine(BubbleSort::new(), &[7]);
        assert_eq!(single.values, vec![7]);
        assert_eq!(single.sorted_mask, vec![true]);
    }
}
