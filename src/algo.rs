//! The built-in sorting variants.
//!
//! - [`QuickSort`]: Delegates to the standard library's unstable sort, a
//!   pattern-defeating quicksort. This is the only variant that reorders.
//! - [`MergeSort`] and [`ShellSort`]: Placeholders. They leave the sequence
//!   untouched and only emit their notification line.

use crate::core::{Algorithm, SortStrategy};

/// Sorts into non-decreasing byte-wise lexicographic order.
///
/// # Examples
///
/// ```
/// use stratsort::algo::QuickSort;
/// use stratsort::core::SortStrategy;
///
/// let mut data = vec!["banana".to_string(), "apple".to_string(), "cherry".to_string()];
/// let mut out = Vec::new();
/// QuickSort.sort_to(&mut data, &mut out).unwrap();
///
/// assert_eq!(data, vec!["apple", "banana", "cherry"]);
/// assert_eq!(String::from_utf8(out).unwrap(), "QuickSorted list \n");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn name(&self) -> &'static str {
        Algorithm::Quick.name()
    }

    fn reorder(&self, list: &mut [String]) {
        list.sort_unstable();
    }
}

/// Placeholder variant: reports a merge sort without reordering anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSort;

impl SortStrategy for MergeSort {
    fn name(&self) -> &'static str {
        Algorithm::Merge.name()
    }

    fn reorder(&self, _list: &mut [String]) {}
}

/// Placeholder variant: reports a shell sort without reordering anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellSort;

impl SortStrategy for ShellSort {
    fn name(&self) -> &'static str {
        Algorithm::Shell.name()
    }

    fn reorder(&self, _list: &mut [String]) {}
}
