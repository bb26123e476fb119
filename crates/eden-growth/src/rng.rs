//! The seeded random source used for production runs.

use eden_core::UniformSource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A ChaCha8 stream seeded once from a `u64`.
///
/// One instance is created per run and passed by `&mut` into every
/// stochastic operation. It is never re-seeded, so the same seed always
/// reproduces the same seeding, frontier choices and neighbour choices.
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededSource {
    /// Create a source from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformSource for SeededSource {
    fn uniform_index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "uniform_index called with an empty range");
        self.rng.random_range(0..n)
    }
}
