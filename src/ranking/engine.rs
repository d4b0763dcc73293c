//! Rule composition engine and precomputed priority tables.

use std::cmp::Ordering;

use super::rules::RankingRule;
use crate::model::KnapsackInstance;

/// Sequential composition of ranking rules.
///
/// Rules are applied in order; a later rule is only consulted when every
/// earlier rule produces an exactly equal key. Remaining ties go to the lower
/// dense index, so the result does not depend on the candidate order.
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{Item, KnapsackInstance};
/// use u_knapsack::ranking::{HigherScore, LighterWeight, PlainRatio, RankingEngine};
///
/// let instance = KnapsackInstance::new(
///     vec![Item::new('a', 2, 2.0), Item::new('b', 1, 1.0), Item::new('c', 2, 4.0)],
///     10,
/// )
/// .unwrap();
///
/// let engine = RankingEngine::new()
///     .with_rule(PlainRatio)
///     .with_rule(HigherScore)
///     .with_rule(LighterWeight);
///
/// // c has ratio 2; a and b tie on ratio 1 and a wins on score.
/// assert_eq!(engine.sort_indices(&[1, 0, 2], &instance), vec![2, 0, 1]);
/// ```
pub struct RankingEngine {
    rules: Vec<Box<dyn RankingRule>>,
}

impl RankingEngine {
    /// Creates an engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule consulted after the existing ones.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    fn keys<K>(&self, index: usize, instance: &KnapsackInstance<K>) -> Vec<f64> {
        let (score, weight) = (instance.score(index), instance.weight(index));
        self.rules.iter().map(|r| r.key(score, weight)).collect()
    }

    /// Sorts candidate item indices by priority (highest priority first).
    pub fn sort_indices<K>(&self, candidates: &[usize], instance: &KnapsackInstance<K>) -> Vec<usize> {
        let mut keyed: Vec<(usize, Vec<f64>)> = candidates
            .iter()
            .map(|&i| (i, self.keys(i, instance)))
            .collect();

        keyed.sort_by(|(a, ka), (b, kb)| {
            for (va, vb) in ka.iter().zip(kb.iter()) {
                if va != vb {
                    return va.partial_cmp(vb).unwrap_or(Ordering::Equal);
                }
            }
            a.cmp(b)
        });

        keyed.into_iter().map(|(i, _)| i).collect()
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One rule's key precomputed for every item of an instance.
///
/// Search loops rank the same items many times; the table turns each
/// comparison into two array reads.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    keys: Vec<f64>,
}

impl PriorityTable {
    /// Evaluates `rule` for every item.
    pub fn new<K, R: RankingRule + ?Sized>(rule: &R, instance: &KnapsackInstance<K>) -> Self {
        let keys = (0..instance.len())
            .map(|i| rule.key(instance.score(i), instance.weight(i)))
            .collect();
        Self { keys }
    }

    /// Key of an item (lower is higher priority).
    pub fn key(&self, index: usize) -> f64 {
        self.keys[index]
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        self.keys[a]
            .partial_cmp(&self.keys[b])
            .unwrap_or(Ordering::Equal)
    }

    /// Stable in-place sort, highest priority first.
    pub fn sort(&self, indices: &mut [usize]) {
        indices.sort_by(|&a, &b| self.compare(a, b));
    }

    /// Stable in-place sort, lowest priority first.
    pub fn sort_worst_first(&self, indices: &mut [usize]) {
        indices.sort_by(|&a, &b| self.compare(b, a));
    }

    /// Every item index, highest priority first, ties in index order.
    pub fn ranked(&self) -> Vec<usize> {
        let mut all: Vec<usize> = (0..self.keys.len()).collect();
        self.sort(&mut all);
        all
    }

    /// The lowest-priority entry of `indices`; the first one on ties.
    pub fn worst(&self, indices: &[usize]) -> Option<usize> {
        indices.iter().copied().fold(None, |worst, i| match worst {
            Some(w) if self.compare(i, w) != Ordering::Greater => Some(w),
            _ => Some(i),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use crate::ranking::{HigherScore, LighterWeight, PenalizedRatio, PlainRatio};

    fn instance() -> KnapsackInstance<char> {
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

    #[test]
    fn test_single_rule_ordering() {
        let instance = instance();
        let engine = RankingEngine::new().with_rule(PlainRatio);
        // Ratios: A 2.5, B 2.0, C 1.25, D 1.0
        assert_eq!(engine.sort_indices(&[3, 1, 2, 0], &instance), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sequential_tie_breaking() {
        let instance = KnapsackInstance::new(
            vec![
                Item::new('x', 2, 2.0),
                Item::new('y', 4, 4.0),
                Item::new('z', 4, 4.0),
                Item::new('w', 1, 1.0),
            ],
            10,
        )
        .unwrap();
        let engine = RankingEngine::new()
            .with_rule(PlainRatio)
            .with_rule(HigherScore)
            .with_rule(LighterWeight);
        assert_eq!(engine.sort_indices(&[3, 2, 1, 0], &instance), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_remaining_ties_by_index() {
        let instance = KnapsackInstance::new(
            vec![Item::new(0u8, 1, 1.0), Item::new(1, 1, 1.0), Item::new(2, 1, 1.0)],
            3,
        )
        .unwrap();
        let engine = RankingEngine::new().with_rule(PlainRatio);
        assert_eq!(engine.sort_indices(&[2, 0, 1], &instance), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_engine_sorts_by_index() {
        let instance = instance();
        let engine = RankingEngine::default();
        assert_eq!(engine.sort_indices(&[3, 1], &instance), vec![1, 3]);
    }

    #[test]
    fn test_priority_table_matches_engine() {
        let instance = instance();
        let rule = PenalizedRatio::default();
        let table = PriorityTable::new(&rule, &instance);
        let engine = RankingEngine::new().with_rule(rule);
        let mut indices = vec![3, 2, 1, 0];
        table.sort(&mut indices);
        assert_eq!(indices, engine.sort_indices(&[3, 2, 1, 0], &instance));
        assert_eq!(table.ranked(), engine.sort_indices(&[0, 1, 2, 3], &instance));
    }

    #[test]
    fn test_worst_picks_first_minimum() {
        let instance = KnapsackInstance::new(
            vec![Item::new(0u8, 2, 2.0), Item::new(1, 1, 1.0), Item::new(2, 1, 3.0)],
            3,
        )
        .unwrap();
        let table = PriorityTable::new(&PlainRatio, &instance);
        assert_eq!(table.worst(&[2, 0, 1]), Some(0));
        assert_eq!(table.worst(&[2, 1, 0]), Some(1));
        assert_eq!(table.worst(&[]), None);

        let mut order = vec![2, 1, 0];
        table.sort_worst_first(&mut order);
        assert_eq!(order, vec![1, 0, 2]);
    }
}
