pub mod algorithms;
pub mod board;
pub mod driver;
pub mod layout;
pub mod palette;
pub mod routine;
#[cfg(test)]
pub mod test_support;

use crate::core::sorting::algorithms::{
    BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
};
use crate::core::exhibit_kinds::ExhibitKind;
use crate::core::lifecycle::Visualizer;
use crate::core::sorting::driver::SortDriver;
use crate::core::sorting::layout::BarLayout;
use crate::core::timing::StepTiming;

pub type BubbleSortDriver = SortDriver<BubbleSort>;
pub type InsertionSortDriver = SortDriver<InsertionSort>;
pub type SelectionSortDriver = SortDriver<SelectionSort>;
pub type QuickSortDriver = SortDriver<QuickSort>;
pub type MergeSortDriver = SortDriver<MergeSort>;
pub type HeapSortDriver = SortDriver<HeapSort>;

/// Builds the driver for a sort exhibit; `None` for non-sort kinds.
#[must_use]
pub fn sort_driver(
    kind: ExhibitKind,
    values: Vec<i32>,
    layout: BarLayout,
    timing: StepTiming,
) -> Option<Box<dyn Visualizer>> {
    let driver: Box<dyn Visualizer> = match kind {
        ExhibitKind::BubbleSort => {
            Box::new(SortDriver::new(BubbleSort::new(), values, layout, timing))
        }
        ExhibitKind::InsertionSort => {
            Box::new(SortDriver::new(InsertionSort::new(), values, layout, timing))
        }
        ExhibitKind::SelectionSort => {
            Box::new(SortDriver::new(SelectionSort::new(), values, layout, timing))
        }
        ExhibitKind::QuickSort => {
            Box::new(SortDriver::new(QuickSort::new(), values, layout, timing))
        }
        ExhibitKind::MergeSort => {
            Box::new(SortDriver::new(MergeSort::new(), values, layout, timing))
        }
        ExhibitKind::HeapSort => {
            Box::new(SortDriver::new(HeapSort::new(), values, layout, timing))
        }
        ExhibitKind::DiskTransfer | ExhibitKind::Flocking => return None,
    };

    Some(driver)
}
