//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! A multi-start metaheuristic. Every round builds a solution with a
//! randomized greedy construction over a restricted candidate list (RCL)
//! and refines it with first-improvement Local Search. The best refined
//! solution over all rounds is returned.
//!
//! Rounds can run on independent per-round generators (see
//! [`GraspConfig::parallel`]); with the `parallel` feature they are
//! spread over the rayon thread pool.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995), "Greedy Randomized Adaptive
//!   Search Procedures", *Journal of Global Optimization* 6, 109-133.
//! - Resende, M. G. C. & Ribeiro, C. C. (2016), *Optimization by GRASP*,
//!   Springer.

mod config;
mod runner;

pub use config::{GraspConfig, DEFAULT_SEED};
pub use runner::{GraspResult, GraspRunner};
