//! # Stratsort
//!
//! `stratsort` provides pluggable sorting strategies for in-place sequences of
//! strings. A caller picks a variant at runtime, binds it to a [`SortContext`]
//! (or calls it directly), and hands over a mutable slice. Every sort call emits
//! exactly one notification line, `"<Name>ed list "`.
//!
//! ## Variants
//!
//! - [`QuickSort`]: Delegates to the standard library's comparison sort. The
//!   slice ends up in non-decreasing lexicographic order.
//! - [`MergeSort`] and [`ShellSort`]: Placeholders that leave the slice as is
//!   and only report that they ran.
//!
//! ## Usage
//!
//! ### Calling a variant directly
//!
//! ```rust
//! use stratsort::prelude::*;
//!
//! let mut data = vec!["banana".to_string(), "apple".to_string(), "cherry".to_string()];
//! QuickSort.sort(&mut data).unwrap(); // prints "QuickSorted list "
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry"]);
//! ```
//!
//! ### Selecting at runtime
//!
//! ```rust
//! use stratsort::prelude::*;
//!
//! let algorithm: Algorithm = "merge".parse().unwrap();
//! let context = SortContext::from(algorithm);
//!
//! let mut data = vec!["banana".to_string(), "apple".to_string()];
//! let mut out = Vec::new();
//! context.execute_sort_to(&mut data, &mut out).unwrap();
//!
//! assert_eq!(data, vec!["banana", "apple"]);
//! assert_eq!(out, b"MergeSorted list \n");
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never
//! writes log output to standard output.

pub mod algo;
pub mod context;
pub mod core;
pub mod error;

pub use crate::algo::{MergeSort, QuickSort, ShellSort};
pub use crate::context::SortContext;
pub use crate::core::{Algorithm, SortStrategy};
pub use crate::error::{Result, SortError};

pub mod prelude {
    pub use crate::algo::{MergeSort, QuickSort, ShellSort};
    pub use crate::context::SortContext;
    pub use crate::core::{Algorithm, SortStrategy};
    pub use crate::error::SortError;
}
