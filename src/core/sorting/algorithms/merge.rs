use crate::core::animator::Beat;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::sorting::board::SortAction;
use crate::core::sorting::palette::Tone;
use crate::core::sorting::routine::{SortBeat, SortRoutine, mark_sorted, paint, paint_range};
use crate::core::timing::StepTiming;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Split { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Begin,
    NextFrame,
    Lift,
    Select,
    Decide,
    Drain,
    Conclude,
    Finish,
    Done,
}

/// Two-pointer merge over a lifted range.
///
/// The unmerged parts of both runs stay contiguous: the left run occupies
/// `next..next + left_remaining` and the right run follows it. Taking from
/// the right rotates its head down to `next`, which keeps equal keys in
/// their original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct MergeCursor {
    left: usize,
    right: usize,
    next: usize,
    left_remaining: usize,
    right_remaining: usize,
    is_final: bool,
}

impl MergeCursor {
    fn right_head(&self) -> usize {
        self.next + self.left_remaining
    }
}

/// Top-down merge sort with the recursion unrolled onto a frame stack.
#[derive(Debug, Clone)]
pub struct MergeSort {
    stage: Stage,
    len: usize,
    frames: Vec<Frame>,
    cursor: MergeCursor,
}

impl Default for MergeSort {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeSort {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Begin,
            len: 0,
            frames: Vec::new(),
            cursor: MergeCursor::default(),
        }
    }

    fn placed(&self, slot: usize) -> SortBeat {
        if self.cursor.is_final {
            mark_sorted(slot)
        } else {
            paint(slot, Tone::Placed)
        }
    }

    fn settle_next(&mut self, timing: &StepTiming) -> Vec<SortBeat> {
        let slot = self.cursor.next;
        self.cursor.next += 1;

        vec![
            Beat::Act(SortAction::Settle {
                slot,
                duration: timing.place,
            }),
            Beat::Await,
            self.placed(slot),
            Beat::Dwell(timing.short_dwell),
        ]
    }
}

impl SortRoutine for MergeSort {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::MergeSort
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
                        self.frames.push(Frame::Split {
                            left: 0,
                            right: self.len - 1,
                        });
                    }
                    self.stage = Stage::NextFrame;
                }
                Stage::NextFrame => match self.frames.pop() {
                    None => self.stage = Stage::Finish,
                    Some(Frame::Split { left, right }) => {
                        if left >= right {
                            continue;
                        }

                        let mid = left + (right - left) / 2;
                        self.frames.push(Frame::Merge { left, mid, right });
                        self.frames.push(Frame::Split {
                            left: mid + 1,
                            right,
                        });
                        self.frames.push(Frame::Split { left, right: mid });

                        let mut beats: Vec<SortBeat> = paint_range(left..=mid, Tone::LeftRun)
                            .chain(paint_range(mid + 1..=right, Tone::RightRun))
                            .collect();
                        beats.push(Beat::Dwell(timing.pass_dwell));
                        return Some(beats);
                    }
                    Some(Frame::Merge { left, mid, right }) => {
                        debug!(left, mid, right, "merging runs");
                        self.cursor = MergeCursor {
                            left,
                            right,
                            next: left,
                            left_remaining: mid - left + 1,
                            right_remaining: right - mid,
                            is_final: left == 0 && right == self.len - 1,
                        };
                        self.stage = Stage::Lift;

                        let mut beats: Vec<SortBeat> = paint_range(left..=mid, Tone::MergeLeft)
                            .chain(paint_range(mid + 1..=right, Tone::MergeRight))
                            .collect();
                        beats.push(Beat::Dwell(timing.pass_dwell));
                        return Some(beats);
                    }
                },
                Stage::Lift => {
                    let MergeCursor { left, right, .. } = self.cursor;
                    self.stage = Stage::Select;

                    let mut beats: Vec<SortBeat> = (left..=right)
                        .map(|slot| {
                            Beat::Act(SortAction::Lift {
                                slot,
                                duration: timing.lift,
                            })
                        })
                        .collect();
                    beats.push(Beat::Await);
                    beats.push(Beat::Dwell(timing.short_dwell));
                    return Some(beats);
                }
                Stage::Select => {
                    let cursor = self.cursor;

                    if cursor.left_remaining > 0 && cursor.right_remaining > 0 {
                        self.stage = Stage::Decide;
                        return Some(vec![
                            paint(cursor.next, Tone::Compare),
                            paint(cursor.right_head(), Tone::Compare),
                            Beat::Dwell(timing.compare_dwell),
                        ]);
                    }

                    self.stage = if cursor.left_remaining + cursor.right_remaining > 0 {
                        Stage::Drain
                    } else {
                        Stage::Conclude
                    };
                }
                Stage::Decide => {
                    let head = self.cursor.next;
                    let right_head = self.cursor.right_head();
                    let mut beats = Vec::new();

                    if values[head] <= values[right_head] {
                        self.cursor.left_remaining -= 1;
                    } else {
                        beats.push(Beat::Act(SortAction::RotateRight {
                            start: head,
                            end: right_head,
                        }));
                        self.cursor.right_remaining -= 1;
                    }
                    beats.extend(self.settle_next(timing));

                    self.stage = Stage::Select;
                    return Some(beats);
                }
                Stage::Drain => {
                    if self.cursor.left_remaining > 0 {
                        self.cursor.left_remaining -= 1;
                    } else {
                        self.cursor.right_remaining -= 1;
                    }

                    self.stage = Stage::Select;
                    return Some(self.settle_next(timing));
                }
                Stage::Conclude => {
                    self.stage = Stage::NextFrame;

                    if self.cursor.is_final {
                        continue;
                    }

                    let MergeCursor { left, right, .. } = self.cursor;
                    let mut beats: Vec<SortBeat> =
                        paint_range(left..=right, Tone::Merged).collect();
                    beats.push(Beat::Dwell(timing.compare_dwell));
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
        let outcome = run_routine(MergeSort::new(), &[5, 2, 8, 1, 9, 3, 7, 4, 6]);

        assert_eq!(outcome.values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn sorts_every_permutation_of_six() {
        assert_sorts_every_permutation(MergeSort::new, 6);
    }

    #[test]
    fn equal_keys_keep_their_original_order() {
        let input = [2, 1, 2, 1, 2, 1, 1];
        let outcome = run_routine(MergeSort::new(), &input);

        assert_eq!(outcome.values, vec![1, 1, 1, 1, 2, 2, 2]);
        // Elements are created in input order, so ids rise left to right
        // within each group of equal keys when the sort is stable.
        for pair in outcome.elements.windows(2).zip(outcome.values.windows(2)) {
            let (ids, keys) = pair;
            if keys[0] == keys[1] {
                assert!(ids[0] < ids[1], "unstable at {ids:?}");
            }
        }
    }

    #[test]
    fn top_level_merge_marks_as_it_places() {
        let outcome = run_routine(MergeSort::new(), &[2, 1]);
        let marks: Vec<usize> = outcome
            .beats
            .iter()
            .filter_map(|beat| match beat {
                Beat::Act(SortAction::MarkSorted { slot }) => Some(*slot),
                _ => None,
            })
            .collect();

        assert_eq!(&marks[..2], &[0, 1]);
    }
}
