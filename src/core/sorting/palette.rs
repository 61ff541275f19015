use crate::core::data::colour::Colour;
use crate::core::exhibit_kinds::ExhibitKind;

/// Semantic colour roles used by the sort drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Base,
    /// The index currently being worked from (selection start, heap root,
    /// quicksort range).
    Focus,
    Compare,
    Pivot,
    Swap,
    Minimum,
    /// The element held lifted by insertion sort, or being extracted.
    Key,
    LeftRun,
    RightRun,
    MergeLeft,
    MergeRight,
    /// Provisionally in order; may still move.
    Placed,
    /// Range that has finished merging.
    Merged,
    Sorted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Colour,
    pub focus: Colour,
    pub compare: Colour,
    pub pivot: Colour,
    pub swap: Colour,
    pub minimum: Colour,
    pub key: Colour,
    pub left_run: Colour,
    pub right_run: Colour,
    pub merge_left: Colour,
    pub merge_right: Colour,
    pub placed: Colour,
    pub merged: Colour,
    pub sorted: Colour,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Colour::from_hex(0x4a90e2),
            focus: Colour::from_hex(0x3498db),
            compare: Colour::from_hex(0xff6b6b),
            pivot: Colour::from_hex(0xf1c40f),
            swap: Colour::from_hex(0x9b59b6),
            minimum: Colour::from_hex(0xe74c3c),
            key: Colour::from_hex(0xf39c12),
            left_run: Colour::from_hex(0x3498db),
            right_run: Colour::from_hex(0xe67e22),
            merge_left: Colour::from_hex(0x9b59b6),
            merge_right: Colour::from_hex(0xf39c12),
            placed: Colour::from_hex(0x2ecc71),
            merged: Colour::from_hex(0x1abc9c),
            sorted: Colour::from_hex(0x27ae60),
        }
    }
}

impl Palette {
    #[must_use]
    pub fn for_exhibit(kind: ExhibitKind) -> Self {
        let default = Self::default();

        match kind {
            ExhibitKind::BubbleSort => Self {
                sorted: Colour::from_hex(0x51cf66),
                ..default
            },
            ExhibitKind::InsertionSort => Self {
                base: Colour::from_hex(0xe74c3c),
                placed: Colour::from_hex(0x27ae60),
                ..default
            },
            ExhibitKind::SelectionSort => Self {
                base: Colour::from_hex(0x9b59b6),
                compare: Colour::from_hex(0xf39c12),
                ..default
            },
            ExhibitKind::QuickSort => Self {
                base: Colour::from_hex(0x16a085),
                compare: Colour::from_hex(0xe74c3c),
                ..default
            },
            ExhibitKind::MergeSort => Self {
                base: Colour::from_hex(0x8e44ad),
                compare: Colour::from_hex(0xe74c3c),
                ..default
            },
            ExhibitKind::HeapSort => Self {
                base: Colour::from_hex(0xd35400),
                compare: Colour::from_hex(0xe74c3c),
                ..default
            },
            ExhibitKind::DiskTransfer | ExhibitKind::Flocking => default,
        }
    }

    #[must_use]
    pub fn colour(&self, tone: Tone) -> Colour {
        match tone {
            Tone::Base => self.base,
            Tone::Focus => self.focus,
            Tone::Compare => self.compare,
            Tone::Pivot => self.pivot,
            Tone::Swap => self.swap,
            Tone::Minimum => self.minimum,
            Tone::Key => self.key,
            Tone::LeftRun => self.left_run,
            Tone::RightRun => self.right_run,
            Tone::MergeLeft => self.merge_left,
            Tone::MergeRight => self.merge_right,
            Tone::Placed => self.placed,
            Tone::Merged => self.merged,
            Tone::Sorted => self.sorted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_tone_differs_from_base_for_every_sort() {
        for &kind in ExhibitKind::SORTS {
            let palette = Palette::for_exhibit(kind);

            assert_ne!(palette.colour(Tone::Sorted), palette.colour(Tone::Base), "{kind}");
        }
    }

    #[test]
    fn overrides_keep_remaining_defaults() {
        let palette = Palette::for_exhibit(ExhibitKind::QuickSort);

        assert_eq!(palette.base, Colour::from_hex(0x16a085));
        assert_eq!(palette.pivot, Palette::default().pivot);
    }
}
