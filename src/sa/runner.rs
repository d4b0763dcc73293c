//! SA execution loop.

use std::hash::Hash;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::{SaConfig, DEFAULT_SEED};
use crate::error::Result;
use crate::greedy::fill_by_priority;
use crate::model::{is_better, KnapsackInstance, Selection, Solution};
use crate::random::{create_rng, unit};
use crate::ranking::{PlainRatio, PriorityTable};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<K> {
    /// The best solution found.
    pub best: Solution<K>,

    /// Score of the starting selection after repair.
    pub initial_score: f64,

    /// Total number of trials, including those with no feasible move.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Number of completed temperature levels.
    pub temperature_levels: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Whether `patience_temps` idle levels ended the run.
    pub stopped_early: bool,

    /// Best score at the start and after every temperature level.
    pub score_history: Vec<f64>,
}

/// A candidate move: evaluated arithmetically, applied on acceptance.
#[derive(Debug, Clone, Copy)]
enum SaMove {
    Add { into: usize },
    Swap { out: usize, into: usize },
}

impl SaMove {
    fn score_after<K>(self, instance: &KnapsackInstance<K>, current: &Selection) -> f64 {
        match self {
            SaMove::Add { into } => current.score() + instance.score(into),
            SaMove::Swap { out, into } => {
                current.score() - instance.score(out) + instance.score(into)
            }
        }
    }

    fn apply<K>(self, instance: &KnapsackInstance<K>, current: &mut Selection) {
        match self {
            SaMove::Add { into } => current.insert(instance, into),
            SaMove::Swap { out, into } => {
                current.remove(instance, out);
                current.insert(instance, into);
            }
        }
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from a plain-ratio greedy construction.
    pub fn run<K: Clone + Eq + Hash>(
        instance: &KnapsackInstance<K>,
        config: &SaConfig,
    ) -> Result<SaResult<K>> {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(instance, None, config, &mut rng)
    }

    /// Runs SA from the caller's selection. An overweight start loses its
    /// worst-ratio members until it fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::greedy::GreedyRunner;
    /// use u_knapsack::model::{Item, KnapsackInstance};
    /// use u_knapsack::sa::{SaConfig, SaRunner};
    ///
    /// let items = (0..30u32)
    ///     .map(|i| Item::new(i, u64::from(i % 5 + 1), f64::from(i % 7 + 1)))
    ///     .collect();
    /// let instance = KnapsackInstance::new(items, 20).unwrap();
    ///
    /// let start = GreedyRunner::run(&instance);
    /// let result = SaRunner::run_from(&instance, &start.selection, &SaConfig::default()).unwrap();
    /// assert!(result.best.score >= start.score);
    /// assert!(result.best.weight <= 20);
    /// ```
    pub fn run_from<K: Clone + Eq + Hash>(
        instance: &KnapsackInstance<K>,
        start: &[K],
        config: &SaConfig,
    ) -> Result<SaResult<K>> {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(instance, Some(start), config, &mut rng)
    }

    /// Runs SA drawing from a caller-owned generator. `config.seed` is
    /// ignored.
    pub fn run_with_rng<K: Clone + Eq + Hash, R: Rng>(
        instance: &KnapsackInstance<K>,
        start: Option<&[K]>,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<K>> {
        config.validate()?;

        let capacity = instance.capacity();
        let table = PriorityTable::new(&PlainRatio, instance);

        let mut current = match start {
            Some(ids) => discard_worst(instance, instance.selection_from(ids)?, &table),
            None => fill_by_priority(instance, &table),
        };

        info!(
            event = "run_start",
            algorithm = "simulated_annealing",
            items = instance.len(),
            capacity = capacity,
            score = current.score(),
        );

        let initial_score = current.score();
        let mut best = current.clone();

        // Positive-score items by plain ratio; ties in input order.
        let ranked: Vec<usize> = table
            .ranked()
            .into_iter()
            .filter(|&j| instance.is_beneficial(j))
            .collect();

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut levels = 0usize;
        let mut idle_levels = 0usize;
        let mut stopped_early = false;
        let mut score_history = vec![best.score()];

        let searchable = capacity > 0 && !instance.is_empty();

        while searchable && temperature > config.min_temperature {
            let mut accepted_this_level = false;

            for _ in 0..config.iterations_per_temperature {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    break;
                }
                total_iterations += 1;

                let worst_inside = table.worst(current.members());
                let do_add = unit(rng) < 0.5 || current.is_empty();

                let mut top = ranked
                    .iter()
                    .copied()
                    .filter(|&j| !current.contains(j))
                    .take(config.top_k);

                let candidate = match worst_inside {
                    Some(out) if !do_add => top
                        .find(|&j| {
                            current.fits_after(instance.weight(out), instance.weight(j), capacity)
                        })
                        .map(|into| SaMove::Swap { out, into }),
                    _ => top
                        .find(|&j| current.fits(instance.weight(j), capacity))
                        .map(|into| SaMove::Add { into }),
                };

                let Some(mv) = candidate else {
                    continue;
                };

                // Metropolis acceptance criterion (maximization)
                let delta = current.score() - mv.score_after(instance, &current);
                let accept = delta <= 0.0 || unit(rng) < (-delta / temperature).exp();

                if accept {
                    if delta < 0.0 {
                        improving_moves += 1;
                    }
                    mv.apply(instance, &mut current);
                    accepted_moves += 1;
                    accepted_this_level = true;
                    trace!(event = "accept", mv = ?mv, score = current.score(), temperature);

                    if is_better(current.score(), current.weight(), best.score(), best.weight()) {
                        best = current.clone();
                    }
                }
            }

            temperature *= config.cooling_rate;
            levels += 1;
            score_history.push(best.score());

            debug!(
                event = "temperature_level",
                level = levels,
                temperature,
                accepted = accepted_this_level,
                current = current.score(),
                best = best.score(),
            );

            if accepted_this_level {
                idle_levels = 0;
            } else {
                idle_levels += 1;
                if idle_levels >= config.patience_temps {
                    stopped_early = true;
                    break;
                }
            }

            if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                break;
            }
        }

        let best = instance.solution(&best);

        info!(
            event = "run_end",
            algorithm = "simulated_annealing",
            iterations = total_iterations,
            accepted = accepted_moves,
            levels,
            stopped_early,
            score = best.score,
            weight = best.weight,
        );

        Ok(SaResult {
            best,
            initial_score,
            iterations: total_iterations,
            accepted_moves,
            improving_moves,
            temperature_levels: levels,
            final_temperature: temperature,
            stopped_early,
            score_history,
        })
    }
}

/// Drops members in ascending plain-ratio order until the selection fits.
fn discard_worst<K>(
    instance: &KnapsackInstance<K>,
    mut selection: Selection,
    table: &PriorityTable,
) -> Selection {
    let capacity = instance.capacity();
    if selection.weight() <= capacity {
        return selection;
    }

    let mut order = selection.members().to_vec();
    table.sort_worst_first(&mut order);
    for i in order {
        if selection.weight() <= capacity {
            break;
        }
        selection.remove(instance, i);
    }
    debug!(event = "repair", kept = selection.len(), weight = selection.weight());
    selection
}
