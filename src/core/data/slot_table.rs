use crate::core::data::element::ElementId;
use std::collections::HashSet;

/// Indirection from logical position to the element currently drawn there.
///
/// Only `swap` and `rotate_right` reorder entries, so the table is always a
/// permutation of the elements it was built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotTable {
    slots: Vec<ElementId>,
}

impl SlotTable {
    #[must_use]
    pub fn new(slots: Vec<ElementId>) -> Self {
        Self { slots }
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<ElementId> {
        self.slots.get(slot).copied()
    }

    #[must_use]
    pub fn elements(&self) -> &[ElementId] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    pub fn rotate_right(&mut self, start: usize, end: usize) {
        if start < end {
            self.slots[start..=end].rotate_right(1);
        }
    }

    /// Empties the table, handing back the elements it held.
    pub fn drain(&mut self) -> Vec<ElementId> {
        std::mem::take(&mut self.slots)
    }

    #[must_use]
    pub fn has_unique_entries(&self) -> bool {
        let unique: HashSet<ElementId> = self.slots.iter().copied().collect();
        unique.len() == self.slots.len()
    }
}
