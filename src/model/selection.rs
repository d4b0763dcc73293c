//! Working selection owned by one algorithm invocation.

use super::instance::KnapsackInstance;

/// Insertion-ordered member list with a membership bitmap and running
/// aggregates.
///
/// Every mutation keeps `weight` and `score` equal to the member sums (up to
/// floating-point rounding for the score). The weight is summed in `u128`,
/// so any start a caller can supply is represented exactly.
#[derive(Debug, Clone)]
pub(crate) struct Selection {
    members: Vec<usize>,
    contained: Vec<bool>,
    weight: u128,
    score: f64,
}

impl Selection {
    /// An empty selection over `n` items.
    pub fn empty(n: usize) -> Self {
        Self {
            members: Vec::new(),
            contained: vec![false; n],
            weight: 0,
            score: 0.0,
        }
    }

    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.contained[index]
    }

    /// Aggregate weight, saturated at `u64::MAX`.
    pub fn weight(&self) -> u64 {
        u64::try_from(self.weight).unwrap_or(u64::MAX)
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Items not in the selection, in dense index order.
    pub fn outside(&self) -> impl Iterator<Item = usize> + '_ {
        self.contained
            .iter()
            .enumerate()
            .filter(|(_, &inside)| !inside)
            .map(|(i, _)| i)
    }

    /// Whether removing `removed` weight and adding `added` stays within
    /// `capacity`. `removed` must not exceed the current weight.
    pub fn fits_after(&self, removed: u64, added: u64, capacity: u64) -> bool {
        self.weight - u128::from(removed) + u128::from(added) <= u128::from(capacity)
    }

    /// Whether `added` more weight still fits.
    pub fn fits(&self, added: u64, capacity: u64) -> bool {
        self.fits_after(0, added, capacity)
    }

    pub fn insert<K>(&mut self, instance: &KnapsackInstance<K>, index: usize) {
        debug_assert!(!self.contained[index]);
        self.contained[index] = true;
        self.members.push(index);
        self.weight += u128::from(instance.weight(index));
        self.score += instance.score(index);
    }

    pub fn remove<K>(&mut self, instance: &KnapsackInstance<K>, index: usize) {
        debug_assert!(self.contained[index]);
        self.contained[index] = false;
        if let Some(pos) = self.members.iter().position(|&m| m == index) {
            self.members.remove(pos);
        }
        self.weight -= u128::from(instance.weight(index));
        self.score -= instance.score(index);
    }
}
