//! Result of an algorithm run.

/// A selection together with its aggregate score and weight.
///
/// `score` and `weight` always equal the sums over `selection`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<K> {
    /// Selected ids, in the order the producing algorithm reports them.
    pub selection: Vec<K>,
    /// Sum of the selected scores.
    pub score: f64,
    /// Sum of the selected (floored) weights.
    pub weight: u64,
}

impl<K> Solution<K> {
    /// The empty solution.
    pub fn empty() -> Self {
        Self {
            selection: Vec::new(),
            score: 0.0,
            weight: 0,
        }
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Whether the aggregate weight respects `capacity`.
    pub fn is_feasible(&self, capacity: u64) -> bool {
        self.weight <= capacity
    }

    /// Higher score wins; equal scores prefer strictly lower weight.
    pub fn is_better_than(&self, other: &Self) -> bool {
        is_better(self.score, self.weight, other.score, other.weight)
    }
}

impl<K> Default for Solution<K> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Incumbent ordering shared by annealing and GRASP: score descending, then
/// weight ascending.
pub(crate) fn is_better(score: f64, weight: u64, best_score: f64, best_weight: u64) -> bool {
    score > best_score || (score == best_score && weight < best_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(score: f64, weight: u64) -> Solution<u8> {
        Solution {
            selection: vec![],
            score,
            weight,
        }
    }

    #[test]
    fn test_is_better_than() {
        assert!(solution(11.0, 5).is_better_than(&solution(10.0, 1)));
        assert!(solution(11.0, 4).is_better_than(&solution(11.0, 5)));
        assert!(!solution(11.0, 5).is_better_than(&solution(11.0, 5)));
        assert!(!solution(9.0, 1).is_better_than(&solution(10.0, 9)));
    }

    #[test]
    fn test_empty_is_feasible() {
        let empty = Solution::<u8>::default();
        assert!(empty.is_empty());
        assert!(empty.is_feasible(0));
    }
}
