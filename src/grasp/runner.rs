//! GRASP execution engine.
//!
//! # Algorithm
//!
//! Each round:
//!
//! 1. **Construction**: repeatedly rank the unchosen positive-score items
//!    that still fit by penalized ratio, and pick uniformly among the first
//!    `rcl_size`, until nothing fits
//! 2. **Refinement**: first-improvement Local Search from the construction
//! 3. **Selection**: the refined solution replaces the incumbent if it
//!    scores higher, or ties with strictly less weight

use std::hash::Hash;

use rand::Rng;
use tracing::{debug, info};

use super::config::{GraspConfig, DEFAULT_SEED};
use crate::error::Result;
use crate::local_search::{LocalSearchConfig, LocalSearchRunner, Refined};
use crate::model::{is_better, KnapsackInstance, Selection, Solution};
use crate::random::{choose, create_rng, split_seeds};
use crate::ranking::{PenalizedRatio, PriorityTable};

/// Result of a GRASP run.
#[derive(Debug, Clone)]
pub struct GraspResult<K> {
    /// Best refined solution across all rounds.
    pub best: Solution<K>,
    /// Number of rounds executed.
    pub rounds: usize,
    /// Round (0-based) that produced the incumbent.
    pub best_round: usize,
    /// Refined score of each round.
    pub round_scores: Vec<f64>,
    /// Incumbent score after each round.
    pub score_history: Vec<f64>,
}

/// GRASP runner.
pub struct GraspRunner;

impl GraspRunner {
    /// Executes GRASP on the given instance.
    ///
    /// `K` must be `Send + Sync` whether or not the `parallel` feature is
    /// enabled, so enabling the feature never changes which id types compile.
    ///
    /// # Errors
    ///
    /// An invalid configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::grasp::{GraspConfig, GraspRunner};
    /// use u_knapsack::model::{Item, KnapsackInstance};
    ///
    /// let instance = KnapsackInstance::new(
    ///     vec![
    ///         Item::new("A", 2, 5.0),
    ///         Item::new("B", 3, 6.0),
    ///         Item::new("C", 4, 5.0),
    ///         Item::new("D", 1, 1.0),
    ///     ],
    ///     5,
    /// )
    /// .unwrap();
    ///
    /// let result = GraspRunner::run(&instance, &GraspConfig::default().with_iterations(10)).unwrap();
    /// assert!((result.best.score - 11.0).abs() < 1e-9);
    /// ```
    pub fn run<K: Clone + Eq + Hash + Send + Sync>(
        instance: &KnapsackInstance<K>,
        config: &GraspConfig,
    ) -> Result<GraspResult<K>> {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Executes GRASP drawing from a caller-owned generator. `config.seed`
    /// is ignored. Same bounds as [`GraspRunner::run`].
    pub fn run_with_rng<K: Clone + Eq + Hash + Send + Sync, R: Rng>(
        instance: &KnapsackInstance<K>,
        config: &GraspConfig,
        rng: &mut R,
    ) -> Result<GraspResult<K>> {
        config.validate()?;

        info!(
            event = "run_start",
            algorithm = "grasp",
            items = instance.len(),
            capacity = instance.capacity(),
            iterations = config.iterations,
            parallel = config.parallel,
        );

        if instance.capacity() == 0 || instance.is_empty() {
            return Ok(GraspResult {
                best: Solution::empty(),
                rounds: 0,
                best_round: 0,
                round_scores: Vec::new(),
                score_history: Vec::new(),
            });
        }

        let ls_config = config.local_search();
        let table = PriorityTable::new(&PenalizedRatio::new(config.alpha, config.lambda_w), instance);
        let ranked: Vec<usize> = table
            .ranked()
            .into_iter()
            .filter(|&j| instance.is_beneficial(j))
            .collect();

        let refined: Vec<Refined> = if config.parallel {
            partitioned_rounds(
                instance,
                &ranked,
                config.rcl_size,
                &ls_config,
                rng,
                config.iterations,
            )
        } else {
            (0..config.iterations)
                .map(|_| round(instance, &ranked, config.rcl_size, &ls_config, rng))
                .collect()
        };

        let mut incumbent: Option<(usize, &Selection)> = None;
        let mut round_scores = Vec::with_capacity(refined.len());
        let mut score_history = Vec::with_capacity(refined.len());

        for (r, outcome) in refined.iter().enumerate() {
            let selection = &outcome.selection;
            round_scores.push(selection.score());

            let improves = incumbent.is_none_or(|(_, best)| {
                is_better(selection.score(), selection.weight(), best.score(), best.weight())
            });
            if improves {
                incumbent = Some((r, selection));
            }

            let best_score = incumbent.map_or(selection.score(), |(_, best)| best.score());
            score_history.push(best_score);

            debug!(
                event = "round",
                round = r,
                constructed = outcome.initial_score,
                refined = selection.score(),
                moves = outcome.moves.total(),
                incumbent = best_score,
            );
        }

        let (best_round, best) = match incumbent {
            Some((r, selection)) => (r, instance.solution(selection)),
            None => (0, Solution::empty()),
        };

        info!(
            event = "run_end",
            algorithm = "grasp",
            rounds = refined.len(),
            best_round,
            score = best.score,
            weight = best.weight,
        );

        Ok(GraspResult {
            best,
            rounds: refined.len(),
            best_round,
            round_scores,
            score_history,
        })
    }
}

/// One construct-and-refine round.
fn round<K, R: Rng>(
    instance: &KnapsackInstance<K>,
    ranked: &[usize],
    rcl_size: usize,
    ls_config: &LocalSearchConfig,
    rng: &mut R,
) -> Refined {
    let constructed = construct(instance, ranked, rcl_size, rng);
    LocalSearchRunner::refine(instance, constructed, ls_config, rng)
}

/// Randomized greedy: uniform picks from the best `rcl_size` items that
/// still fit. `ranked` lists positive-score items, best first.
fn construct<K, R: Rng>(
    instance: &KnapsackInstance<K>,
    ranked: &[usize],
    rcl_size: usize,
    rng: &mut R,
) -> Selection {
    let capacity = instance.capacity();
    let mut selection = Selection::empty(instance.len());
    let mut rcl = Vec::with_capacity(rcl_size);

    loop {
        rcl.clear();
        rcl.extend(
            ranked
                .iter()
                .copied()
                .filter(|&j| !selection.contains(j) && selection.fits(instance.weight(j), capacity))
                .take(rcl_size),
        );
        match choose(&rcl, rng) {
            Some(&j) => selection.insert(instance, j),
            None => break,
        }
    }
    selection
}

/// Rounds on per-round generators seeded from the master stream, so the
/// outcome is the same whether or not they run on the rayon pool.
fn partitioned_rounds<K: Send + Sync, R: Rng>(
    instance: &KnapsackInstance<K>,
    ranked: &[usize],
    rcl_size: usize,
    ls_config: &LocalSearchConfig,
    rng: &mut R,
    iterations: usize,
) -> Vec<Refined> {
    let seeds = split_seeds(rng, iterations);
    let run_round = |seed: u64| {
        let mut round_rng = create_rng(seed);
        round(instance, ranked, rcl_size, ls_config, &mut round_rng)
    };

    #[cfg(feature = "parallel")]
    let refined = {
        use rayon::prelude::*;
        seeds.into_par_iter().map(run_round).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let refined = seeds.into_iter().map(run_round).collect();

    refined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn example() -> KnapsackInstance<char> {
        KnapsackInstance::new(
            vec![
                Item::new('A', 2, 5.0),
                Item::new('B', 3, 6.0),
                Item::new('C', 4, 5.0),
                Item::new('D', 1, 1.0),
            ],
            5,
        )
        .unwrap()
    }

    fn larger(n: usize) -> KnapsackInstance<usize> {
        let items = (0..n)
            .map(|i| {
                let weight = 1 + (i * 7 % 13) as u64;
                let score = ((i * 11 % 17) as f64) - 2.0;
                Item::new(i, weight, score)
            })
            .collect();
        KnapsackInstance::new(items, 40).unwrap()
    }

    #[test]
    fn test_example_finds_optimum() {
        let config = GraspConfig::default().with_iterations(10).with_seed(42);
        let result = GraspRunner::run(&example(), &config).unwrap();
        assert!((result.best.score - 11.0).abs() < 1e-9);
        assert_eq!(result.best.weight, 5);
        assert_eq!(result.rounds, 10);
    }

    #[test]
    fn test_reproducible_with_seed() {
        let instance = larger(60);
        let config = GraspConfig::default().with_iterations(15).with_seed(9);
        let a = GraspRunner::run(&instance, &config).unwrap();
        let b = GraspRunner::run(&instance, &config).unwrap();
        assert_eq!(a.best.selection, b.best.selection);
        assert_eq!(a.round_scores, b.round_scores);
        assert_eq!(a.best_round, b.best_round);
    }

    #[test]
    fn test_incumbent_dominates_rounds() {
        let instance = larger(60);
        let config = GraspConfig::default().with_iterations(12).with_seed(1);
        let result = GraspRunner::run(&instance, &config).unwrap();

        assert_eq!(result.round_scores.len(), 12);
        assert_eq!(result.score_history.len(), 12);
        assert!(result.best.is_feasible(instance.capacity()));
        for &score in &result.round_scores {
            assert!(result.best.score + 1e-9 >= score);
        }
        assert!((result.round_scores[result.best_round] - result.best.score).abs() < 1e-9);
        for pair in result.score_history.windows(2) {
            assert!(pair[1] + 1e-9 >= pair[0]);
        }
        assert!((result.score_history[0] - result.round_scores[0]).abs() < 1e-12);
    }

    #[test]
    fn test_zero_iterations_is_empty() {
        let config = GraspConfig::default().with_iterations(0);
        let result = GraspRunner::run(&example(), &config).unwrap();
        assert!(result.best.is_empty());
        assert_eq!(result.best.score, 0.0);
        assert_eq!(result.rounds, 0);
        assert!(result.round_scores.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_empty() {
        let instance = KnapsackInstance::new(vec![Item::new('A', 1, 3.0)], 0).unwrap();
        let result = GraspRunner::run(&instance, &GraspConfig::default()).unwrap();
        assert!(result.best.is_empty());
        assert_eq!(result.rounds, 0);
    }

    #[test]
    fn test_non_positive_items_never_selected() {
        let instance = KnapsackInstance::new(
            vec![
                Item::new('A', 1, -3.0),
                Item::new('B', 1, 0.0),
                Item::new('C', 2, 4.0),
            ],
            10,
        )
        .unwrap();
        let result = GraspRunner::run(&instance, &GraspConfig::default().with_iterations(5)).unwrap();
        assert_eq!(result.best.selection, vec!['C']);
    }

    #[test]
    fn test_partitioned_rounds_reproducible() {
        let instance = larger(80);
        let config = GraspConfig::default()
            .with_iterations(16)
            .with_parallel(true)
            .with_seed(5);
        let a = GraspRunner::run(&instance, &config).unwrap();
        let b = GraspRunner::run(&instance, &config).unwrap();
        assert_eq!(a.best.selection, b.best.selection);
        assert_eq!(a.round_scores, b.round_scores);
        assert!(a.best.is_feasible(instance.capacity()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GraspConfig::default().with_rcl_size(0);
        assert!(GraspRunner::run(&example(), &config).is_err());
    }

    #[test]
    fn test_construction_is_maximal() {
        let instance = larger(40);
        let table = PriorityTable::new(&PenalizedRatio::default(), &instance);
        let ranked: Vec<usize> = table
            .ranked()
            .into_iter()
            .filter(|&j| instance.is_beneficial(j))
            .collect();
        let mut rng = create_rng(3);

        for _ in 0..10 {
            let selection = construct(&instance, &ranked, 5, &mut rng);
            assert!(selection.weight() <= instance.capacity());
            for &i in selection.members() {
                assert!(instance.score(i) > 0.0);
            }
            for j in selection.outside() {
                if instance.is_beneficial(j) {
                    assert!(!selection.fits(instance.weight(j), instance.capacity()));
                }
            }
        }
    }

    #[test]
    fn test_rcl_of_one_is_greedy() {
        let instance = example();
        let table = PriorityTable::new(&PenalizedRatio::default(), &instance);
        let ranked = table.ranked();
        let mut rng = create_rng(0);
        let selection = construct(&instance, &ranked, 1, &mut rng);
        // A ranks first and B still fits after it.
        assert_eq!(selection.members(), &[0, 1]);
    }
}
