//! Error types

use thiserror::Error;

/// Errors raised while selecting or running a sort strategy
#[derive(Error, Debug)]
pub enum SortError {
    /// The context was asked to sort before any strategy was bound
    #[error("no sort strategy bound to context")]
    NoStrategy,

    /// An algorithm name did not match any built-in variant
    #[error("unknown sort algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Writing the notification line failed
    #[error("failed to write sort notification: {0}")]
    Notify(#[from] std::io::Error),
}

/// Result alias for stratsort operations
pub type Result<T> = std::result::Result<T, SortError>;
