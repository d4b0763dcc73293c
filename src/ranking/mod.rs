//! Candidate ranking shared by all algorithms.
//!
//! Ranking only orders candidates; feasibility is always decided by raw
//! weight against the remaining capacity.
//!
//! - [`penalized_ratio`] orders candidates for Local Search and GRASP.
//! - [`plain_ratio`] orders candidates for Greedy and Simulated Annealing.
//!
//! Rules can be composed with a [`RankingEngine`] (later rules break ties of
//! earlier ones, then the lower index wins), or precomputed for a whole instance with a
//! [`PriorityTable`] when the same items are ranked repeatedly.
//!
//! # References
//!
//! Dantzig, G. B. (1957), "Discrete-Variable Extremum Problems",
//! *Operations Research* 5(2), 266-288 (ratio ordering for the knapsack).

mod engine;
mod rules;

pub use engine::{PriorityTable, RankingEngine};
pub use rules::{
    penalized_ratio, plain_ratio, HigherScore, LighterWeight, PenalizedRatio, PlainRatio,
    RankingRule, DEFAULT_ALPHA, DEFAULT_LAMBDA_W,
};
