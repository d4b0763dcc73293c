//! Seeded random source.
//!
//! Every randomized algorithm draws from one [`SeededRng`] per top-level
//! invocation. The generator is passed explicitly (`&mut R`) through nested
//! calls, so GRASP and the Local Search it invokes consume a single linear
//! draw sequence.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator used by the runners. ChaCha8 yields the same stream on every
/// platform and `rand` release.
pub type SeededRng = ChaCha8Rng;

/// Creates the generator for a seed.
pub fn create_rng(seed: u64) -> SeededRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Uniform choice, `None` on an empty slice.
pub fn choose<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Uniform draw in `[0, 1)`.
pub fn unit<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0.0..1.0)
}

/// Draws `n` independent seeds, one per parallel work unit.
pub fn split_seeds<R: Rng>(rng: &mut R, n: usize) -> Vec<u64> {
    (0..n).map(|_| rng.random()).collect()
}
