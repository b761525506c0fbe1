//! Runtime strategy selection.
//!
//! [`SortContext`] holds at most one bound [`SortStrategy`] and forwards sort
//! requests to it. The strategy can be swapped between calls; the most recently
//! bound one always receives the next request.

use crate::core::{Algorithm, SortStrategy};
use crate::error::{Result, SortError};
use std::fmt;
use std::io::{self, Write};

/// Holds the currently selected sort strategy.
///
/// # Examples
///
/// ```
/// use stratsort::{Algorithm, SortContext};
///
/// let mut context = SortContext::from(Algorithm::Merge);
/// let mut data = vec!["b".to_string(), "a".to_string()];
/// let mut out = Vec::new();
///
/// context.execute_sort_to(&mut data, &mut out).unwrap();
/// assert_eq!(data, vec!["b", "a"]);
///
/// context.set_boxed(Algorithm::Quick.strategy());
/// context.execute_sort_to(&mut data, &mut out).unwrap();
/// assert_eq!(data, vec!["a", "b"]);
///
/// assert_eq!(String::from_utf8(out).unwrap(), "MergeSorted list \nQuickSorted list \n");
/// ```
#[derive(Default)]
pub struct SortContext {
    strategy: Option<Box<dyn SortStrategy>>,
}

impl SortContext {
    /// Creates a context with no strategy bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context bound to `strategy`.
    pub fn with_strategy<S: SortStrategy + 'static>(strategy: S) -> Self {
        Self {
            strategy: Some(Box::new(strategy)),
        }
    }

    /// Replaces the bound strategy.
    pub fn set_strategy<S: SortStrategy + 'static>(&mut self, strategy: S) {
        log::trace!("binding sort strategy {}", strategy.name());
        self.strategy = Some(Box::new(strategy));
    }

    /// Replaces the bound strategy with an already boxed one.
    pub fn set_boxed(&mut self, strategy: Box<dyn SortStrategy>) {
        log::trace!("binding sort strategy {}", strategy.name());
        self.strategy = Some(strategy);
    }

    /// Returns the bound strategy, if any.
    pub fn strategy(&self) -> Option<&dyn SortStrategy> {
        self.strategy.as_deref()
    }

    /// Returns `true` if a strategy is bound.
    pub fn is_bound(&self) -> bool {
        self.strategy.is_some()
    }

    /// Sorts `list` with the bound strategy, notifying on standard output.
    pub fn execute_sort(&self, list: &mut [String]) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.execute_sort_to(list, &mut handle)
    }

    /// Sorts `list` with the bound strategy, notifying on `out`.
    ///
    /// Fails with [`SortError::NoStrategy`] when nothing is bound; neither
    /// `list` nor `out` is touched in that case.
    pub fn execute_sort_to(&self, list: &mut [String], out: &mut dyn Write) -> Result<()> {
        match &self.strategy {
            Some(strategy) => strategy.sort_to(list, out),
            None => {
                log::warn!("sort requested on a context with no strategy");
                Err(SortError::NoStrategy)
            }
        }
    }
}

impl From<Algorithm> for SortContext {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            strategy: Some(algorithm.strategy()),
        }
    }
}

impl fmt::Debug for SortContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortContext")
            .field("strategy", &self.strategy.as_ref().map(|s| s.name()))
            .finish()
    }
}
