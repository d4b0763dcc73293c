//! Item model: the read-only problem instance and the solutions built on it.
//!
//! Caller ids are reindexed densely in input order when a
//! [`KnapsackInstance`] is built. Weights and scores live in flat arrays and
//! each algorithm owns a bitmap-backed working selection over those indices.

mod instance;
mod selection;
mod solution;

pub use instance::{Item, KnapsackInstance};
pub(crate) use selection::Selection;
pub use solution::Solution;
pub(crate) use solution::is_better;
