//! Local Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the caller's selection (repaired if overweight) or from a
//!    penalized-ratio greedy construction
//! 2. Each round:
//!    a. Shuffle the inside list and the outside list; rank positive-score
//!    outside items by penalized ratio and keep the first `top_out`
//!    b. Apply the first improving move (add > swap 1-1 > swap 1-2 >
//!    swap 2-1), rebuild the lists and scan again
//!    c. The round ends when a scan finds nothing
//! 3. Rounds with no applied move increment a stall counter, any applied
//!    move resets it; stop at `max_no_improve`

use std::hash::Hash;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::{LocalSearchConfig, DEFAULT_SEED};
use super::moves::{first_improvement, MoveCounts};
use crate::error::Result;
use crate::greedy::fill_by_priority;
use crate::model::{KnapsackInstance, Selection, Solution};
use crate::random::{create_rng, shuffle};
use crate::ranking::{PenalizedRatio, PriorityTable};

/// Result of a Local Search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult<K> {
    /// The local optimum reached.
    pub best: Solution<K>,

    /// Score of the starting selection after repair.
    pub initial_score: f64,

    /// Whether the caller's starting selection exceeded the capacity.
    pub repaired: bool,

    /// Number of rounds executed.
    pub rounds: usize,

    /// Applied moves per kind.
    pub moves: MoveCounts,
}

/// Search outcome over dense indices, shared with GRASP.
#[derive(Debug, Clone)]
pub(crate) struct Refined {
    pub selection: Selection,
    pub initial_score: f64,
    pub repaired: bool,
    pub rounds: usize,
    pub moves: MoveCounts,
}

/// First-improvement Local Search runner.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs Local Search from a penalized-ratio greedy construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::local_search::{LocalSearchConfig, LocalSearchRunner};
    /// use u_knapsack::model::{Item, KnapsackInstance};
    ///
    /// let instance = KnapsackInstance::new(
    ///     vec![Item::new(1, 2, 5.0), Item::new(2, 3, 6.0), Item::new(3, 4, 5.0)],
    ///     5,
    /// )
    /// .unwrap();
    ///
    /// let result = LocalSearchRunner::run(&instance, &LocalSearchConfig::default()).unwrap();
    /// assert!(result.best.weight <= 5);
    /// assert!(result.best.score >= result.initial_score);
    /// ```
    pub fn run<K: Clone + Eq + Hash>(
        instance: &KnapsackInstance<K>,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult<K>> {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(instance, None, config, &mut rng)
    }

    /// Runs Local Search from the caller's selection.
    ///
    /// Ids listed twice count once. Items with non-positive score are kept
    /// if the repaired start contains them.
    pub fn run_from<K: Clone + Eq + Hash>(
        instance: &KnapsackInstance<K>,
        start: &[K],
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult<K>> {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(instance, Some(start), config, &mut rng)
    }

    /// Runs Local Search drawing from a caller-owned generator.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// An invalid configuration, or a start naming unknown ids.
    pub fn run_with_rng<K: Clone + Eq + Hash, R: Rng>(
        instance: &KnapsackInstance<K>,
        start: Option<&[K]>,
        config: &LocalSearchConfig,
        rng: &mut R,
    ) -> Result<LocalSearchResult<K>> {
        config.validate()?;

        info!(
            event = "run_start",
            algorithm = "local_search",
            items = instance.len(),
            capacity = instance.capacity(),
        );

        let start = match start {
            Some(ids) => instance.selection_from(ids)?,
            None => fill_by_priority(instance, &penalized_table(instance, config)),
        };
        let refined = Self::refine(instance, start, config, rng);
        let best = instance.solution(&refined.selection);

        info!(
            event = "run_end",
            algorithm = "local_search",
            rounds = refined.rounds,
            moves = refined.moves.total(),
            score = best.score,
            weight = best.weight,
        );

        Ok(LocalSearchResult {
            best,
            initial_score: refined.initial_score,
            repaired: refined.repaired,
            rounds: refined.rounds,
            moves: refined.moves,
        })
    }

    /// Repairs `start` and climbs to a local optimum. The config must
    /// already be validated.
    pub(crate) fn refine<K, R: Rng>(
        instance: &KnapsackInstance<K>,
        start: Selection,
        config: &LocalSearchConfig,
        rng: &mut R,
    ) -> Refined {
        let table = penalized_table(instance, config);
        let capacity = instance.capacity();

        let repaired = start.weight() > capacity;
        let mut selection = if repaired {
            repair(instance, &start, &table)
        } else {
            start
        };
        let initial_score = selection.score();

        let mut moves = MoveCounts::default();
        let mut rounds = 0;

        if capacity == 0 || instance.is_empty() {
            return Refined {
                selection,
                initial_score,
                repaired,
                rounds,
                moves,
            };
        }

        let mut no_improve_count = 0;
        while no_improve_count < config.max_no_improve {
            rounds += 1;
            let mut improved = false;

            loop {
                let mut inside = selection.members().to_vec();
                let mut outside: Vec<usize> = selection.outside().collect();
                shuffle(&mut inside, rng);
                shuffle(&mut outside, rng);

                outside.retain(|&j| instance.is_beneficial(j));
                table.sort(&mut outside);
                outside.truncate(config.top_out);

                match first_improvement(instance, &selection, &inside, &outside) {
                    Some(mv) => {
                        mv.apply(instance, &mut selection);
                        moves.record(mv.kind());
                        improved = true;
                        trace!(
                            event = "move",
                            kind = ?mv.kind(),
                            score = selection.score(),
                            weight = selection.weight(),
                        );
                    }
                    None => break,
                }
            }

            if improved {
                no_improve_count = 0;
            } else {
                no_improve_count += 1;
            }

            debug!(
                event = "round",
                round = rounds,
                improved = improved,
                stalled = no_improve_count,
                score = selection.score(),
            );
        }

        Refined {
            selection,
            initial_score,
            repaired,
            rounds,
            moves,
        }
    }
}

fn penalized_table<K>(instance: &KnapsackInstance<K>, config: &LocalSearchConfig) -> PriorityTable {
    PriorityTable::new(&PenalizedRatio::new(config.alpha, config.lambda_w), instance)
}

/// Rebuilds an overweight start from its own members, best penalized ratio
/// first, keeping each member that still fits.
fn repair<K>(instance: &KnapsackInstance<K>, start: &Selection, table: &PriorityTable) -> Selection {
    let mut order = start.members().to_vec();
    table.sort(&mut order);

    let capacity = instance.capacity();
    let mut selection = Selection::empty(instance.len());
    for i in order {
        if selection.fits(instance.weight(i), capacity) {
            selection.insert(instance, i);
        }
    }
    debug!(
        event = "repair",
        kept = selection.len(),
        dropped = start.len() - selection.len(),
        weight = selection.weight(),
    );
    selection
}
