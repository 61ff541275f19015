use crate::core::animator::Beat;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::sorting::palette::Tone;
use crate::core::sorting::routine::{SortBeat, SortRoutine, mark_sorted, paint, relocate};
use crate::core::timing::StepTiming;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Begin,
    Build,
    Sift,
    Extract,
    Finish,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiftStep {
    Visit,
    InspectLeft,
    DecideLeft,
    InspectRight,
    DecideRight,
    Resolve,
}

/// Iterative sift-down of `root` within the first `heap_size` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sift {
    heap_size: usize,
    root: usize,
    largest: usize,
    step: SiftStep,
}

impl Sift {
    fn new(heap_size: usize, root: usize) -> Self {
        Self {
            heap_size,
            root,
            largest: root,
            step: SiftStep::Visit,
        }
    }

    fn left(&self) -> usize {
        2 * self.root + 1
    }

    fn right(&self) -> usize {
        2 * self.root + 2
    }
}

/// Max-heap sort: heapify bottom-up, then move the root behind the heap one
/// element at a time.
#[derive(Debug, Clone)]
pub struct HeapSort {
    stage: Stage,
    len: usize,
    /// Next non-leaf to heapify while building; `None` once the heap is built.
    build_next: Option<usize>,
    /// Last slot of the unsorted region.
    end: usize,
    sift: Sift,
}

impl Default for HeapSort {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapSort {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Begin,
            len: 0,
            build_next: None,
            end: 0,
            sift: Sift::new(0, 0),
        }
    }

    /// Advances the sift by one step, returning beats when the step has any
    /// and `true` once the sift is finished.
    fn step_sift(&mut self, values: &[i32], timing: &StepTiming) -> (Option<Vec<SortBeat>>, bool) {
        let sift = &mut self.sift;

        match sift.step {
            SiftStep::Visit => {
                sift.largest = sift.root;
                sift.step = SiftStep::InspectLeft;
                (
                    Some(vec![paint(sift.root, Tone::Focus), Beat::Dwell(timing.compare_dwell)]),
                    false,
                )
            }
            SiftStep::InspectLeft => {
                if sift.left() < sift.heap_size {
                    sift.step = SiftStep::DecideLeft;
                    (
                        Some(vec![
                            paint(sift.left(), Tone::Compare),
                            Beat::Dwell(timing.short_dwell),
                        ]),
                        false,
                    )
                } else {
                    sift.step = SiftStep::Resolve;
                    (None, false)
                }
            }
            SiftStep::DecideLeft => {
                if values[sift.left()] > values[sift.largest] {
                    sift.largest = sift.left();
                }
                sift.step = SiftStep::InspectRight;
                (None, false)
            }
            SiftStep::InspectRight => {
                if sift.right() < sift.heap_size {
                    sift.step = SiftStep::DecideRight;
                    (
                        Some(vec![
                            paint(sift.right(), Tone::Compare),
                            Beat::Dwell(timing.short_dwell),
                        ]),
                        false,
                    )
                } else {
                    sift.step = SiftStep::Resolve;
                    (None, false)
                }
            }
            SiftStep::DecideRight => {
                if values[sift.right()] > values[sift.largest] {
                    sift.largest = sift.right();
                }
                sift.step = SiftStep::Resolve;
                (None, false)
            }
            SiftStep::Resolve => {
                let (root, largest, heap_size) = (sift.root, sift.largest, sift.heap_size);

                if largest == root {
                    let restore: Vec<SortBeat> =
                        (0..heap_size).map(|slot| paint(slot, Tone::Base)).collect();
                    return (Some(restore), true);
                }

                sift.root = largest;
                sift.step = SiftStep::Visit;

                let mut beats = vec![
                    paint(root, Tone::Swap),
                    paint(largest, Tone::Swap),
                    Beat::Dwell(timing.compare_dwell),
                ];
                beats.extend(relocate(root, largest, timing));
                beats.push(paint(root, Tone::Base));
                (Some(beats), false)
            }
        }
    }
}

impl SortRoutine for HeapSort {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::HeapSort
    }

    fn restart(&mut self) {
        *self = Self::new();
    }

    fn next_phase(&mut self, values: &[i32], timing: &StepTiming) -> Option<Vec<SortBeat>> {
        loop {
            match self.stage {
                Stage::Begin => {
                    self.len = values.len();
                    self.build_next = (self.len / 2).checked_sub(1);
                    self.end = self.len.saturating_sub(1);
                    self.stage = match self.len {
                        0 => Stage::Done,
                        1 => Stage::Finish,
                        _ => Stage::Build,
                    };
                }
                Stage::Build => match self.build_next {
                    Some(root) => {
                        self.build_next = root.checked_sub(1);
                        self.sift = Sift::new(self.len, root);
                        self.stage = Stage::Sift;
                    }
                    None => {
                        debug!(len = self.len, "max heap built");
                        self.stage = Stage::Extract;
                    }
                },
                Stage::Sift => {
                    let (beats, finished) = self.step_sift(values, timing);

                    if finished {
                        self.stage = if self.sift.heap_size == self.len {
                            Stage::Build
                        } else {
                            Stage::Extract
                        };
                    }
                    if let Some(beats) = beats {
                        return Some(beats);
                    }
                }
                Stage::Extract => {
                    if self.end == 0 {
                        self.stage = Stage::Finish;
                        continue;
                    }

                    let end = self.end;
                    let mut beats = vec![
                        paint(0, Tone::Key),
                        paint(end, Tone::Key),
                        Beat::Dwell(timing.pass_dwell),
                    ];
                    beats.extend(relocate(0, end, timing));
                    beats.push(mark_sorted(end));

                    self.end -= 1;
                    self.sift = Sift::new(end, 0);
                    self.stage = Stage::Sift;
                    return Some(beats);
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
