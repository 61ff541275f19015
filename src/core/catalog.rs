//! Descriptive text for each exhibit.

use crate::core::exhibit_kinds::ExhibitKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub description: &'static str,
    pub rules: &'static [&'static str],
    pub how_it_works: &'static [&'static str],
}

const BUBBLE_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    description: "An algorithm that sorts by comparing adjacent elements. The largest element 'bubbles' up to the end.",
    rules: &[],
    how_it_works: &[
        "Traverse the array from beginning to end",
        "Compare adjacent elements",
        "Swap if they are in wrong order",
        "After one pass, the largest element is at the end",
        "Repeat until the array is sorted",
    ],
};

const INSERTION_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    description: "An algorithm that inserts each element into its correct position in the sorted portion. Similar to sorting cards in hand.",
    rules: &[],
    how_it_works: &[
        "Start from the second element",
        "Compare current element with sorted portion",
        "Find correct position and insert",
        "Repeat until all elements are processed",
    ],
};

const SELECTION_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    description: "An algorithm that finds the minimum value and moves it to the front. One of the most intuitive sorting methods.",
    rules: &[],
    how_it_works: &[
        "Find minimum value in unsorted portion",
        "Swap with the first element of unsorted portion",
        "Increase the size of sorted portion by one",
        "Repeat until all elements are sorted",
    ],
};

const QUICK_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    time_complexity: "O(n log n) ~ O(n²)",
    space_complexity: "O(log n)",
    description: "A divide-and-conquer algorithm that partitions array around a pivot. Shows excellent average performance.",
    rules: &[],
    how_it_works: &[
        "Select a pivot element",
        "Partition: smaller elements left, larger elements right",
        "Recursively apply quicksort to both partitions",
        "Repeat until all parts are sorted",
    ],
};

const HEAP_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Heap Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    description: "A sorting algorithm using heap data structure. Builds a max heap and extracts maximum values sequentially.",
    rules: &[],
    how_it_works: &[
        "Build a max heap from the array",
        "Swap root (maximum) with last element",
        "Reduce heap size and restore heap property",
        "Repeat until all elements are sorted",
    ],
};

const MERGE_SORT: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    description: "A divide-and-conquer algorithm that divides array in half, sorts each part, then merges. Stable sort with guaranteed performance.",
    rules: &[],
    how_it_works: &[
        "Divide array into two halves",
        "Recursively sort each half",
        "Merge the two sorted halves",
        "Repeat until entire array is sorted",
    ],
};

const TOWER_OF_HANOI: AlgorithmInfo = AlgorithmInfo {
    name: "Tower of Hanoi",
    time_complexity: "O(2ⁿ)",
    space_complexity: "O(n)",
    description: "A puzzle with three rods and disks of different sizes. The goal is to move all disks to another rod.",
    rules: &[
        "Only one disk can be moved at a time",
        "Larger disk cannot be placed on smaller disk",
        "Move all disks to the destination rod",
    ],
    how_it_works: &[
        "Move n-1 disks to auxiliary rod",
        "Move the largest disk to destination rod",
        "Move n-1 disks from auxiliary to destination",
        "Solve recursively",
    ],
};

const BOIDS: AlgorithmInfo = AlgorithmInfo {
    name: "Boids Algorithm",
    time_complexity: "O(n²)",
    space_complexity: "O(n)",
    description: "An algorithm that simulates flocking behavior of birds. Creates complex group behavior from simple rules.",
    rules: &[
        "Separation: Maintain distance from nearby neighbors",
        "Alignment: Move in same direction as neighbors",
        "Cohesion: Tendency to move toward center of neighbors",
    ],
    how_it_works: &[
        "Detect neighbors around each individual",
        "Calculate forces based on three rules",
        "Combine calculated forces to determine movement",
        "Apply to all individuals simultaneously",
    ],
};

#[must_use]
pub const fn describe(kind: ExhibitKind) -> &'static AlgorithmInfo {
    match kind {
        ExhibitKind::BubbleSort => &BUBBLE_SORT,
        ExhibitKind::InsertionSort => &INSERTION_SORT,
        ExhibitKind::SelectionSort => &SELECTION_SORT,
        ExhibitKind::QuickSort => &QUICK_SORT,
        ExhibitKind::MergeSort => &MERGE_SORT,
        ExhibitKind::HeapSort => &HEAP_SORT,
        ExhibitKind::DiskTransfer => &TOWER_OF_HANOI,
        ExhibitKind::Flocking => &BOIDS,
    }
}
