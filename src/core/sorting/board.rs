use crate::core::data::element::{ElementDescriptor, ElementShape, TransitionId};
use crate::core::data::sequence::Sequence;
use crate::core::data::slot_table::SlotTable;
use crate::core::ports::render_adapter::RenderAdapter;
use crate::core::sorting::layout::BarLayout;
use crate::core::sorting::palette::{Palette, Tone};
use glam::Vec3;
use std::time::Duration;

/// Atomic side effects a sort routine asks for. Slots are resolved to
/// elements when the action runs, not when it is scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortAction {
    /// Recolour a slot unless it is already marked sorted.
    Paint { slot: usize, tone: Tone },
    /// Permanent sorted colour.
    MarkSorted { slot: usize },
    Lift { slot: usize, duration: Duration },
    /// Move whatever sits in `slot` to that slot's resting place.
    Settle { slot: usize, duration: Duration },
    Swap { a: usize, b: usize },
    /// Move the entry at `end` to `start`, shifting the rest right.
    RotateRight { start: usize, end: usize },
}

/// Logical values, the slot → element table and the sorted mask of one
/// sort exhibit. Values and slots are only ever permuted together.
#[derive(Debug, Clone)]
pub struct SortBoard {
    sequence: Sequence,
    slots: SlotTable,
    sorted: Vec<bool>,
    layout: BarLayout,
    palette: Palette,
}

impl SortBoard {
    #[must_use]
    pub fn new(values: Vec<i32>, layout: BarLayout, palette: Palette) -> Self {
        let len = values.len();

        Self {
            sequence: Sequence::new(values),
            slots: SlotTable::default(),
            sorted: vec![false; len],
            layout,
            palette,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[i32] {
        self.sequence.values()
    }

    #[must_use]
    pub fn original(&self) -> &[i32] {
        self.sequence.original()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Whether the working values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sequence.is_sorted()
    }

    #[must_use]
    pub fn slots(&self) -> &SlotTable {
        &self.slots
    }

    #[must_use]
    pub fn sorted_mask(&self) -> &[bool] {
        &self.sorted
    }

    #[must_use]
    pub fn is_marked_sorted(&self, slot: usize) -> bool {
        self.sorted.get(slot).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn has_elements(&self) -> bool {
        !self.slots.is_empty()
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Creates one element per slot from the current values.
    pub fn build(&mut self, adapter: &mut dyn RenderAdapter) {
        if self.has_elements() {
            return;
        }

        let elements = (0..self.len())
            .map(|slot| {
                let value = self.values()[slot];
                let height = self.bar_height(value);

                adapter.create_element(ElementDescriptor {
                    value,
                    shape: ElementShape::Bar {
                        width: self.layout.bar_width,
                        height,
                    },
                    position: self.layout.rest_position(slot, self.len(), height),
                    colour: self.palette.colour(Tone::Base),
                })
            })
            .collect();

        self.slots = SlotTable::new(elements);
    }

    pub fn teardown(&mut self, adapter: &mut dyn RenderAdapter) {
        for id in self.slots.drain() {
            adapter.destroy_element(id);
        }
    }

    /// Halts every transition on this board's elements.
    pub fn halt(&self, adapter: &mut dyn RenderAdapter) {
        for &id in self.slots.elements() {
            adapter.cancel_transitions(id);
        }
    }

    /// Back to the original order with no sorted marks. Elements are left
    /// alone; callers rebuild them.
    pub fn restore(&mut self) {
        self.sequence.restore();
        self.sorted.iter_mut().for_each(|mark| *mark = false);
    }

    pub fn apply(
        &mut self,
        action: SortAction,
        adapter: &mut dyn RenderAdapter,
        started: &mut Vec<TransitionId>,
    ) {
        match action {
            SortAction::Paint { slot, tone } => {
                if self.is_marked_sorted(slot) {
                    return;
                }
                if let Some(id) = self.slots.get(slot) {
                    adapter.set_colour(id, self.palette.colour(tone));
                }
            }
            SortAction::MarkSorted { slot } => {
                if let Some(mark) = self.sorted.get_mut(slot) {
                    *mark = true;
                }
                if let Some(id) = self.slots.get(slot) {
                    adapter.set_colour(id, self.palette.colour(Tone::Sorted));
                }
            }
            SortAction::Lift { slot, duration } => {
                if let Some(id) = self.slots.get(slot) {
                    started.push(adapter.lift_by(id, self.layout.lift_height, duration));
                }
            }
            SortAction::Settle { slot, duration } => {
                if let Some(id) = self.slots.get(slot) {
                    let target = self.rest_position(slot);
                    started.push(adapter.move_to(id, target, duration));
                }
            }
            SortAction::Swap { a, b } => {
                self.sequence.swap(a, b);
                self.slots.swap(a, b);
            }
            SortAction::RotateRight { start, end } => {
                self.sequence.rotate_right(start, end);
                self.slots.rotate_right(start, end);
            }
        }
    }

    #[must_use]
    pub fn rest_position(&self, slot: usize) -> Vec3 {
        let height = self.bar_height(self.values()[slot]);
        self.layout.rest_position(slot, self.len(), height)
    }

    fn bar_height(&self, value: i32) -> f32 {
        self.layout.bar_height(value, self.sequence.max_value())
    }
}
