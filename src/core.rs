//! Core traits and types for stratsort.
//!
//! This module defines:
//! - [`SortStrategy`]: The capability every sorting variant implements.
//! - [`Algorithm`]: A tag naming the built-in variants, selectable at runtime.

use crate::error::{Result, SortError};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Suffix appended to the algorithm name in the notification line.
pub const NOTIFICATION_SUFFIX: &str = "ed list ";

/// Builds the notification line (without newline) for the given algorithm name.
///
/// ```
/// use stratsort::core::notification;
///
/// assert_eq!(notification("QuickSort"), "QuickSorted list ");
/// ```
pub fn notification(name: &str) -> String {
    format!("{name}{NOTIFICATION_SUFFIX}")
}

/// A pluggable algorithm that reorders a sequence of strings in place.
///
/// Implementors only need [`name`](SortStrategy::name) and
/// [`reorder`](SortStrategy::reorder); the notification plumbing is provided.
/// The sequence is a slice, so a strategy can permute it but never change its
/// length.
///
/// # Examples
///
/// Implementing a custom variant:
///
/// ```
/// use stratsort::core::SortStrategy;
///
/// struct BubbleSort;
///
/// impl SortStrategy for BubbleSort {
///     fn name(&self) -> &'static str {
///         "BubbleSort"
///     }
///
///     fn reorder(&self, list: &mut [String]) {
///         for end in (1..list.len()).rev() {
///             for i in 0..end {
///                 if list[i] > list[i + 1] {
///                     list.swap(i, i + 1);
///                 }
///             }
///         }
///     }
/// }
///
/// let mut data = vec!["b".to_string(), "a".to_string()];
/// let mut out = Vec::new();
/// BubbleSort.sort_to(&mut data, &mut out).unwrap();
///
/// assert_eq!(data, vec!["a", "b"]);
/// assert_eq!(out, b"BubbleSorted list \n");
/// ```
pub trait SortStrategy {
    /// Name of the algorithm, used to build the notification line.
    fn name(&self) -> &'static str;

    /// Reorders `list` in place without emitting anything.
    fn reorder(&self, list: &mut [String]);

    /// Reorders `list`, then writes exactly one notification line to `out`.
    ///
    /// If the write fails the reorder has already been applied.
    fn sort_to(&self, list: &mut [String], out: &mut dyn Write) -> Result<()> {
        self.reorder(list);
        log::debug!("{} ran over {} item(s)", self.name(), list.len());
        writeln!(out, "{}", notification(self.name()))?;
        Ok(())
    }

    /// Same as [`sort_to`](SortStrategy::sort_to) on standard output.
    fn sort(&self, list: &mut [String]) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.sort_to(list, &mut handle)
    }
}

impl<S: SortStrategy + ?Sized> SortStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn reorder(&self, list: &mut [String]) {
        (**self).reorder(list)
    }

    fn sort_to(&self, list: &mut [String], out: &mut dyn Write) -> Result<()> {
        (**self).sort_to(list, out)
    }
}

/// The built-in sorting variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Standard library comparison sort.
    Quick,
    /// Notification-only stub.
    Merge,
    /// Notification-only stub.
    Shell,
}

impl Algorithm {
    /// Every variant, in the order the command-line demo runs them.
    pub const ALL: [Algorithm; 3] = [Algorithm::Quick, Algorithm::Merge, Algorithm::Shell];

    /// Returns the algorithm name, e.g. `"QuickSort"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Quick => "QuickSort",
            Algorithm::Merge => "MergeSort",
            Algorithm::Shell => "ShellSort",
        }
    }

    /// Builds the strategy this tag names.
    pub fn strategy(self) -> Box<dyn SortStrategy> {
        use crate::algo::{MergeSort, QuickSort, ShellSort};

        match self {
            Algorithm::Quick => Box::new(QuickSort),
            Algorithm::Merge => Box::new(MergeSort),
            Algorithm::Shell => Box::new(ShellSort),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" | "quicksort" => Ok(Algorithm::Quick),
            "merge" | "mergesort" => Ok(Algorithm::Merge),
            "shell" | "shellsort" => Ok(Algorithm::Shell),
            _ => Err(SortError::UnknownAlgorithm(s.to_string())),
        }
    }
}
