//! Neighborhood moves and the first-improvement scan.

use crate::model::{KnapsackInstance, Selection};

/// Kind of neighborhood move, in scan priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Insert one outside item.
    Add,
    /// Replace one inside item with one outside item.
    SwapOneForOne,
    /// Replace one inside item with two outside items.
    SwapOneForTwo,
    /// Replace two inside items with one outside item.
    SwapTwoForOne,
}

/// Number of applied moves per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCounts {
    pub add: usize,
    pub swap_one_for_one: usize,
    pub swap_one_for_two: usize,
    pub swap_two_for_one: usize,
}

impl MoveCounts {
    pub(crate) fn record(&mut self, kind: MoveKind) {
        match kind {
            MoveKind::Add => self.add += 1,
            MoveKind::SwapOneForOne => self.swap_one_for_one += 1,
            MoveKind::SwapOneForTwo => self.swap_one_for_two += 1,
            MoveKind::SwapTwoForOne => self.swap_two_for_one += 1,
        }
    }

    /// Total number of applied moves.
    pub fn total(&self) -> usize {
        self.add + self.swap_one_for_one + self.swap_one_for_two + self.swap_two_for_one
    }
}

/// A concrete improving move over dense item indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Move {
    Add { into: usize },
    SwapOneForOne { out: usize, into: usize },
    SwapOneForTwo { out: usize, into: [usize; 2] },
    SwapTwoForOne { out: [usize; 2], into: usize },
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Add { .. } => MoveKind::Add,
            Move::SwapOneForOne { .. } => MoveKind::SwapOneForOne,
            Move::SwapOneForTwo { .. } => MoveKind::SwapOneForTwo,
            Move::SwapTwoForOne { .. } => MoveKind::SwapTwoForOne,
        }
    }

    /// Removals first, then insertions.
    pub fn apply<K>(self, instance: &KnapsackInstance<K>, selection: &mut Selection) {
        match self {
            Move::Add { into } => selection.insert(instance, into),
            Move::SwapOneForOne { out, into } => {
                selection.remove(instance, out);
                selection.insert(instance, into);
            }
            Move::SwapOneForTwo { out, into } => {
                selection.remove(instance, out);
                selection.insert(instance, into[0]);
                selection.insert(instance, into[1]);
            }
            Move::SwapTwoForOne { out, into } => {
                selection.remove(instance, out[0]);
                selection.remove(instance, out[1]);
                selection.insert(instance, into);
            }
        }
    }
}

/// Scans the neighborhood in priority order (add, 1-1, 1-2, 2-1) and
/// returns the first feasible move that raises the aggregate score.
///
/// `inside` lists the current members in scan order; `candidates` lists
/// positive-score outside items in scan order.
pub(crate) fn first_improvement<K>(
    instance: &KnapsackInstance<K>,
    selection: &Selection,
    inside: &[usize],
    candidates: &[usize],
) -> Option<Move> {
    let capacity = instance.capacity();
    let w = |i: usize| instance.weight(i);
    let s = |i: usize| instance.score(i);

    for &j in candidates {
        if selection.fits(w(j), capacity) {
            return Some(Move::Add { into: j });
        }
    }

    for &i in inside {
        for &j in candidates {
            if s(j) > s(i) && selection.fits_after(w(i), w(j), capacity) {
                return Some(Move::SwapOneForOne { out: i, into: j });
            }
        }
    }

    for &i in inside {
        for (a, &j) in candidates.iter().enumerate() {
            for &k in &candidates[a + 1..] {
                if s(j) + s(k) > s(i)
                    && selection.fits_after(w(i), w(j).saturating_add(w(k)), capacity)
                {
                    return Some(Move::SwapOneForTwo { out: i, into: [j, k] });
                }
            }
        }
    }

    for (a, &i) in inside.iter().enumerate() {
        for &u in &inside[a + 1..] {
            for &j in candidates {
                if s(j) > s(i) + s(u)
                    && selection.fits_after(w(i).saturating_add(w(u)), w(j), capacity)
                {
                    return Some(Move::SwapTwoForOne { out: [i, u], into: j });
                }
            }
        }
    }

    None
}
