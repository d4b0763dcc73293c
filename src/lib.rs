//! Budgeted selection (0/1 knapsack) heuristics.
//!
//! Given items with an identifier, an integer weight and a real-valued
//! score, choose a subset whose total weight stays within a capacity while
//! maximizing the total score. Four algorithms share one item model:
//!
//! - **Greedy**: deterministic one-pass construction by score-per-weight
//!   ratio.
//! - **Local Search**: first-improvement hill climbing with add and swap
//!   moves (1-for-1, 1-for-2, 2-for-1) over a weight-penalized ranking.
//! - **Simulated Annealing (SA)**: add and swap moves under the Metropolis
//!   acceptance rule with geometric cooling.
//! - **GRASP**: multi-start randomized greedy construction refined by
//!   Local Search.
//!
//! Every result is feasible: total weight never exceeds the capacity, and
//! its reported score and weight are the sums over the selected items.
//! Randomized algorithms are reproducible for a fixed seed.
//!
//! # Example
//!
//! ```
//! use u_knapsack::greedy::GreedyRunner;
//! use u_knapsack::local_search::{LocalSearchConfig, LocalSearchRunner};
//! use u_knapsack::model::{Item, KnapsackInstance};
//!
//! let instance = KnapsackInstance::new(
//!     vec![
//!         Item::new("A", 2, 5.0),
//!         Item::new("B", 3, 6.0),
//!         Item::new("C", 4, 5.0),
//!         Item::new("D", 1, 1.0),
//!     ],
//!     5,
//! )?;
//!
//! let greedy = GreedyRunner::run(&instance);
//! assert_eq!(greedy.selection, vec!["A", "B"]);
//!
//! let refined = LocalSearchRunner::run_from(&instance, &["D"], &LocalSearchConfig::default())?;
//! assert!((refined.best.score - 11.0).abs() < 1e-9);
//! # Ok::<(), u_knapsack::KnapsackError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: run GRASP rounds on the rayon thread pool.
//! - `serde`: `Serialize`/`Deserialize` for items, solutions and configs.

pub mod error;
pub mod grasp;
pub mod greedy;
pub mod local_search;
pub mod model;
pub mod random;
pub mod ranking;
pub mod sa;

pub use error::{KnapsackError, Result};
