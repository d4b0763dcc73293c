//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Moves add the best-ranked outside item that fits, or
//! replace the worst-ratio inside item with one. Worsening moves are
//! accepted with a probability that decreases with the temperature
//! (Metropolis criterion), and the best-ever selection is tracked
//! separately from the current one.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::{SaConfig, DEFAULT_SEED};
pub use runner::{SaResult, SaRunner};
