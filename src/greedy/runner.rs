//! Greedy construction.

use std::hash::Hash;

use tracing::{debug, info};

use crate::model::{KnapsackInstance, Selection, Solution};
use crate::ranking::{HigherScore, LighterWeight, PlainRatio, PriorityTable, RankingEngine};

/// Deterministic single-pass ratio greedy.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Builds a solution by scanning positive-score items in descending
    /// `score / weight` order (ties: higher score, then lighter weight, then
    /// input order) and adding each one that still fits.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::greedy::GreedyRunner;
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
    /// let solution = GreedyRunner::run(&instance);
    /// assert_eq!(solution.selection, vec!["A", "B"]);
    /// assert_eq!(solution.weight, 5);
    /// ```
    pub fn run<K: Clone + Eq + Hash>(instance: &KnapsackInstance<K>) -> Solution<K> {
        info!(event = "run_start", algorithm = "greedy", items = instance.len());

        let selection = Self::construct(instance);
        let solution = instance.solution(&selection);

        info!(
            event = "run_end",
            algorithm = "greedy",
            selected = solution.len(),
            score = solution.score,
            weight = solution.weight,
        );
        solution
    }

    fn construct<K: Clone + Eq + Hash>(instance: &KnapsackInstance<K>) -> Selection {
        let mut selection = Selection::empty(instance.len());
        let capacity = instance.capacity();
        if capacity == 0 {
            return selection;
        }

        let candidates: Vec<usize> = (0..instance.len())
            .filter(|&i| instance.is_beneficial(i))
            .collect();

        let engine = RankingEngine::new()
            .with_rule(PlainRatio)
            .with_rule(HigherScore)
            .with_rule(LighterWeight);

        for index in engine.sort_indices(&candidates, instance) {
            if selection.fits(instance.weight(index), capacity) {
                selection.insert(instance, index);
                debug!(event = "add", item = index, weight = selection.weight());
            }
        }
        selection
    }
}

/// Positive-score items in table order, each added if it still fits.
pub(crate) fn fill_by_priority<K>(instance: &KnapsackInstance<K>, table: &PriorityTable) -> Selection {
    let capacity = instance.capacity();
    let mut selection = Selection::empty(instance.len());
    if capacity == 0 {
        return selection;
    }
    for j in table.ranked() {
        if instance.is_beneficial(j) && selection.fits(instance.weight(j), capacity) {
            selection.insert(instance, j);
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn example() -> KnapsackInstance<&'static str> {
        KnapsackInstance::new(
            vec![
                Item::new("A", 2, 5.0),
                Item::new("B", 3, 6.0),
                Item::new("C", 4, 5.0),
                Item::new("D", 1, 1.0),
            ],
            5,
        )
        .unwrap()
    }

    #[test]
    fn test_greedy_example() {
        let solution = GreedyRunner::run(&example());
        assert_eq!(solution.selection, vec!["A", "B"]);
        assert_eq!(solution.weight, 5);
        assert!((solution.score - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_deterministic() {
        let instance = example();
        assert_eq!(GreedyRunner::run(&instance), GreedyRunner::run(&instance));
    }

    #[test]
    fn test_greedy_skips_items_that_do_not_fit_and_continues() {
        let instance = KnapsackInstance::new(
            vec![
                Item::new(0u32, 4, 12.0), // ratio 3
                Item::new(1, 3, 6.0),     // ratio 2, does not fit after 0
                Item::new(2, 1, 1.5),     // ratio 1.5
            ],
            5,
        )
        .unwrap();
        let solution = GreedyRunner::run(&instance);
        assert_eq!(solution.selection, vec![0, 2]);
        assert_eq!(solution.weight, 5);
    }

    #[test]
    fn test_greedy_tie_break_prefers_higher_score() {
        let instance = KnapsackInstance::new(
            vec![Item::new('s', 1, 2.0), Item::new('l', 2, 4.0)],
            2,
        )
        .unwrap();
        let solution = GreedyRunner::run(&instance);
        assert_eq!(solution.selection, vec!['l']);
    }

    #[test]
    fn test_greedy_ignores_non_positive_scores() {
        let instance = KnapsackInstance::new(
            vec![Item::new(0u8, 1, 0.0), Item::new(1, 1, -2.0), Item::new(2, 1, 1.0)],
            10,
        )
        .unwrap();
        let solution = GreedyRunner::run(&instance);
        assert_eq!(solution.selection, vec![2]);
    }

    #[test]
    fn test_greedy_empty_and_zero_capacity() {
        let empty = KnapsackInstance::<u8>::new(vec![], 10).unwrap();
        assert!(GreedyRunner::run(&empty).is_empty());

        let zero = KnapsackInstance::new(vec![Item::new(0u8, 1, 1.0)], 0).unwrap();
        let solution = GreedyRunner::run(&zero);
        assert!(solution.is_empty());
        assert_eq!(solution.weight, 0);
    }
}
