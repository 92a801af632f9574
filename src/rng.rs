//! Seeded deterministic random number generation
//!
//! Every trajectory generation call owns its own generator instance; nothing
//! here is shared or global. The sequence produced by a seed is stable across
//! processes and platforms.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Deterministic float stream seeded from an integer
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Next value in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Next value in [lo, hi)
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}

/// Fresh non-reproducible seed from ambient entropy
///
/// Only used when the caller supplies no seed; the seed is reported back so
/// the round stays auditable.
pub fn generate_seed() -> u64 {
    rand::rng().random()
}
