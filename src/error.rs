//! Error types for instance construction and algorithm configuration.

use thiserror::Error;

/// Errors reported by `u-knapsack`.
///
/// Item-related variants carry the position of the offending entry in the
/// input slice, so ids do not need to implement `Debug`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnapsackError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two items share the same id.
    #[error("duplicate item id at position {position}")]
    DuplicateItem {
        /// Position of the second occurrence.
        position: usize,
    },

    /// An item score is NaN or infinite.
    #[error("item at position {position} has a non-finite score")]
    NonFiniteScore {
        /// Position of the item.
        position: usize,
    },

    /// A starting selection names an id that is not part of the instance.
    #[error("starting selection entry {position} is not an item of the instance")]
    UnknownItem {
        /// Position within the starting selection.
        position: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;
