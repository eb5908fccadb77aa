//! Randomness for critical-hit rolls
//!
//! Every crit roll goes through [`CritRoll`] so that a session can be seeded
//! for reproducible runs and tests can force the outcome.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0.0, 1.0)`. A hit is critical iff `roll() < crit_chance`.
pub trait CritRoll {
    fn roll(&mut self) -> f32;
}

/// Seeded random number generator for deterministic simulation.
///
/// When a seed is provided, the same seed always produces the same sequence
/// of crit rolls. Without a seed, uses system entropy.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
    /// The seed used to initialize this RNG (if deterministic)
    pub seed: Option<u64>,
}

impl SeededRng {
    /// Create a new rng with a specific seed for deterministic behavior
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a new rng with random entropy (non-deterministic)
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }
}

impl Default for SeededRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl CritRoll for SeededRng {
    fn roll(&mut self) -> f32 {
        self.rng.gen()
    }
}

/// Always returns the same draw. Useful for forcing or suppressing crits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRoll(pub f32);

impl CritRoll for FixedRoll {
    fn roll(&mut self) -> f32 {
        self.0
    }
}
