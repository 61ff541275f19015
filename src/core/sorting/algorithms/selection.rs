use crate::core::animator::Beat;
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::sorting::palette::Tone;
use crate::core::sorting::routine::{SortBeat, SortRoutine, mark_sorted, paint, relocate};
use crate::core::timing::StepTiming;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Begin,
    StartPass,
    Inspect,
    Decide,
    Exchange,
    Finish,
    Done,
}

#[derive(Debug, Clone)]
pub struct SelectionSort {
    stage: Stage,
    len: usize,
    start: usize,
    cursor: usize,
    minimum: usize,
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSort {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Begin,
            len: 0,
            start: 0,
            cursor: 0,
            minimum: 0,
        }
    }
}

impl SortRoutine for SelectionSort {
    fn kind(&self) -> ExhibitKind {
        ExhibitKind::SelectionSort
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
                        _ => Stage::StartPass,
                    };
                }
                Stage::StartPass => {
                    self.minimum = self.start;
                    self.cursor = self.start + 1;
                    self.stage = Stage::Inspect;

                    return Some(vec![paint(self.start, Tone::Focus)]);
                }
                Stage::Inspect => {
                    self.stage = Stage::Decide;

                    return Some(vec![
                        paint(self.cursor, Tone::Compare),
                        Beat::Dwell(timing.compare_dwell),
                    ]);
                }
                Stage::Decide => {
                    let j = self.cursor;
                    let mut beats = Vec::new();

                    if values[j] < values[self.minimum] {
                        if self.minimum != self.start {
                            beats.push(paint(self.minimum, Tone::Base));
                        }
                        beats.push(paint(j, Tone::Minimum));
                        self.minimum = j;
                    } else {
                        beats.push(paint(j, Tone::Base));
                    }
                    beats.push(Beat::Dwell(timing.short_dwell));

                    self.cursor += 1;
                    if self.cursor >= self.len {
                        self.stage = Stage::Exchange;
                    } else {
                        self.stage = Stage::Inspect;
                    }

                    return Some(beats);
                }
                Stage::Exchange => {
                    let (start, minimum) = (self.start, self.minimum);
                    debug!(start, minimum, "selection pass finished");

                    let mut beats = relocate(start, minimum, timing);
                    if minimum != start {
                        beats.push(paint(minimum, Tone::Base));
                    }
                    beats.push(mark_sorted(start));
                    beats.push(Beat::Dwell(timing.pass_dwell));

                    self.start += 1;
                    self.stage = if self.start >= self.len - 1 {
                        Stage::Finish
                    } else {
                        Stage::StartPass
                    };

                    return Some(beats);
                }
                Stage::Finish => {
                    self.stage = Stage::Done;
                    return Some(vec![mark_sorted(self.len - 1)]);
                }
                Stage::Done => return None,
            }
        }
    }
}
