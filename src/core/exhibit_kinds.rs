use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ExhibitKind {
    #[default]
    BubbleSort,
    InsertionSort,
    SelectionSort,
    QuickSort,
    MergeSort,
    HeapSort,
    DiskTransfer,
    Flocking,
}

impl ExhibitKind {
    pub const ALL: &'static [Self] = &[
        Self::BubbleSort,
        Self::InsertionSort,
        Self::SelectionSort,
        Self::QuickSort,
        Self::MergeSort,
        Self::HeapSort,
        Self::DiskTransfer,
        Self::Flocking,
    ];

    pub const SORTS: &'static [Self] = &[
        Self::BubbleSort,
        Self::InsertionSort,
        Self::SelectionSort,
        Self::QuickSort,
        Self::MergeSort,
        Self::HeapSort,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BubbleSort => "Bubble Sort",
            Self::InsertionSort => "Insertion Sort",
            Self::SelectionSort => "Selection Sort",
            Self::QuickSort => "Quick Sort",
            Self::MergeSort => "Merge Sort",
            Self::HeapSort => "Heap Sort",
            Self::DiskTransfer => "Tower of Hanoi",
            Self::Flocking => "Boids",
        }
    }

    /// File-name friendly identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BubbleSort => "bubble_sort",
            Self::InsertionSort => "insertion_sort",
            Self::SelectionSort => "selection_sort",
            Self::QuickSort => "quick_sort",
            Self::MergeSort => "merge_sort",
            Self::HeapSort => "heap_sort",
            Self::DiskTransfer => "tower_of_hanoi",
            Self::Flocking => "boids",
        }
    }

    #[must_use]
    pub const fn is_sort(self) -> bool {
        !matches!(self, Self::DiskTransfer | Self::Flocking)
    }
}

impl fmt::Display for ExhibitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_every_exhibit_once() {
        let unique: HashSet<ExhibitKind> = ExhibitKind::ALL.iter().copied().collect();

        assert_eq!(unique.len(), ExhibitKind::ALL.len());
        assert_eq!(ExhibitKind::ALL.len(), 8);
    }

    #[test]
    fn sorts_are_the_sort_kinds() {
        for &kind in ExhibitKind::ALL {
            assert_eq!(kind.is_sort(), ExhibitKind::SORTS.contains(&kind));
        }
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<&str> = ExhibitKind::ALL.iter().map(|kind| kind.slug()).collect();

        assert_eq!(slugs.len(), ExhibitKind::ALL.len());
    }
}
