//! Read-only item collection with a dense index.

use std::collections::HashMap;
use std::hash::Hash;

use super::selection::Selection;
use super::solution::Solution;
use crate::error::{KnapsackError, Result};

/// One candidate for selection.
///
/// A weight of zero is floored to 1 when the item enters an instance; it is
/// never free.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K> {
    /// Unique identifier supplied by the caller.
    pub id: K,
    /// Non-negative integer weight.
    pub weight: u64,
    /// Real-valued benefit. Items with `score <= 0` are never added by the
    /// search algorithms.
    pub score: f64,
}

impl<K> Item<K> {
    /// Creates a new item.
    pub fn new(id: K, weight: u64, score: f64) -> Self {
        Self { id, weight, score }
    }
}

/// The item model of one run: items reindexed densely in input order, plus
/// the capacity bound.
///
/// All algorithms work on dense indices (`0..len()`) internally and map back
/// to caller ids only when producing a [`Solution`].
///
/// # Examples
///
/// ```
/// use u_knapsack::model::{Item, KnapsackInstance};
///
/// let instance = KnapsackInstance::new(
///     vec![Item::new("a", 2, 5.0), Item::new("b", 0, 1.0)],
///     5,
/// )
/// .unwrap();
///
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.weight(1), 1); // zero weight is floored
/// assert_eq!(instance.index_of(&"b"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackInstance<K> {
    ids: Vec<K>,
    weights: Vec<u64>,
    scores: Vec<f64>,
    index: HashMap<K, usize>,
    capacity: u64,
}

impl<K: Clone + Eq + Hash> KnapsackInstance<K> {
    /// Builds an instance from an ordered item list.
    ///
    /// A capacity `<= 0` is accepted and stored as `0`: nothing fits and
    /// every algorithm returns an empty solution.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::DuplicateItem`] if two items share an id,
    /// [`KnapsackError::NonFiniteScore`] if a score is NaN or infinite.
    pub fn new(items: Vec<Item<K>>, capacity: i64) -> Result<Self> {
        let mut ids = Vec::with_capacity(items.len());
        let mut weights = Vec::with_capacity(items.len());
        let mut scores = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.into_iter().enumerate() {
            if !item.score.is_finite() {
                return Err(KnapsackError::NonFiniteScore { position });
            }
            if index.insert(item.id.clone(), position).is_some() {
                return Err(KnapsackError::DuplicateItem { position });
            }
            ids.push(item.id);
            weights.push(item.weight.max(1));
            scores.push(item.score);
        }

        Ok(Self {
            ids,
            weights,
            scores,
            index,
            capacity: u64::try_from(capacity).unwrap_or(0),
        })
    }

    /// Dense index of an id.
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Builds the aggregates of an arbitrary id list.
    ///
    /// Duplicate ids count once. The result is not checked against the
    /// capacity; use [`Solution::is_feasible`] for that. A weight sum beyond
    /// `u64::MAX` is reported as `u64::MAX`.
    ///
    /// # Errors
    ///
    /// [`KnapsackError::UnknownItem`] if an id is not part of the instance.
    pub fn evaluate(&self, ids: &[K]) -> Result<Solution<K>> {
        let selection = self.selection_from(ids)?;
        Ok(self.solution(&selection))
    }

    /// Resolves caller ids into a working selection, keeping first
    /// occurrences in order. Capacity is not enforced here.
    pub(crate) fn selection_from(&self, ids: &[K]) -> Result<Selection> {
        let mut selection = Selection::empty(self.len());
        for (position, id) in ids.iter().enumerate() {
            let index = self
                .index_of(id)
                .ok_or(KnapsackError::UnknownItem { position })?;
            if !selection.contains(index) {
                selection.insert(self, index);
            }
        }
        Ok(selection)
    }

    /// Materializes a working selection. The score is recomputed from the
    /// members in order; the weight is the exact member sum, saturated at
    /// `u64::MAX`.
    pub(crate) fn solution(&self, selection: &Selection) -> Solution<K> {
        let members = selection.members();
        Solution {
            selection: members.iter().map(|&i| self.ids[i].clone()).collect(),
            score: members.iter().map(|&i| self.scores[i]).sum(),
            weight: selection.weight(),
        }
    }
}

impl<K> KnapsackInstance<K> {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the instance holds no items.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Capacity bound on aggregate weight.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Id of the item at a dense index.
    pub fn id(&self, index: usize) -> &K {
        &self.ids[index]
    }

    /// Weight (floored to 1) of the item at a dense index.
    pub fn weight(&self, index: usize) -> u64 {
        self.weights[index]
    }

    /// Score of the item at a dense index.
    pub fn score(&self, index: usize) -> f64 {
        self.scores[index]
    }

    /// Whether adding the item can ever raise the aggregate score.
    pub(crate) fn is_beneficial(&self, index: usize) -> bool {
        self.scores[index] > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KnapsackInstance<&'static str> {
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
    fn test_dense_index_follows_input_order() {
        let instance = sample();
        assert_eq!(instance.len(), 4);
        assert_eq!(instance.capacity(), 5);
        assert_eq!(instance.index_of(&"C"), Some(2));
        assert_eq!(*instance.id(3), "D");
        assert_eq!(instance.index_of(&"Z"), None);
    }

    #[test]
    fn test_zero_weight_is_floored() {
        let instance = KnapsackInstance::new(vec![Item::new(1u32, 0, 3.0)], 10).unwrap();
        assert_eq!(instance.weight(0), 1);
        let solution = instance.evaluate(&[1]).unwrap();
        assert_eq!(solution.weight, 1);
    }

    #[test]
    fn test_negative_capacity_becomes_zero() {
        let instance = KnapsackInstance::new(vec![Item::new(1u32, 1, 3.0)], -7).unwrap();
        assert_eq!(instance.capacity(), 0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = KnapsackInstance::new(
            vec![Item::new("x", 1, 1.0), Item::new("y", 1, 1.0), Item::new("x", 2, 2.0)],
            3,
        )
        .unwrap_err();
        assert_eq!(err, KnapsackError::DuplicateItem { position: 2 });
    }

    #[test]
    fn test_non_finite_score_rejected() {
        let err = KnapsackInstance::new(vec![Item::new(0u8, 1, f64::NAN)], 3).unwrap_err();
        assert_eq!(err, KnapsackError::NonFiniteScore { position: 0 });
    }

    #[test]
    fn test_evaluate_sums_members_once() {
        let instance = sample();
        let solution = instance.evaluate(&["B", "A", "B"]).unwrap();
        assert_eq!(solution.selection, vec!["B", "A"]);
        assert_eq!(solution.weight, 5);
        assert!((solution.score - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_unknown_id() {
        let instance = sample();
        let err = instance.evaluate(&["A", "Q"]).unwrap_err();
        assert_eq!(err, KnapsackError::UnknownItem { position: 1 });
    }

    #[test]
    fn test_evaluate_saturates_heavy_weight() {
        let instance = KnapsackInstance::new(
            vec![Item::new(0u8, u64::MAX, 5.0), Item::new(1, 1, 1.0), Item::new(2, 2, 3.0)],
            10,
        )
        .unwrap();
        let solution = instance.evaluate(&[0, 1]).unwrap();
        assert_eq!(solution.weight, u64::MAX);
        assert!((solution.score - 6.0).abs() < 1e-12);
        assert!(!solution.is_feasible(instance.capacity()));
    }
}
