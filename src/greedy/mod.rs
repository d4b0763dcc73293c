//! Greedy ratio construction.
//!
//! Deterministic baseline: one pass over the items in descending
//! score-per-weight order, adding each item that still fits. No
//! backtracking, no randomness, O(n log n).
//!
//! # References
//!
//! Dantzig, G. B. (1957), "Discrete-Variable Extremum Problems",
//! *Operations Research* 5(2), 266-288.

mod runner;

pub(crate) use runner::fill_by_priority;
pub use runner::GreedyRunner;
