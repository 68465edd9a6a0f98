//! Deterministic per-trial RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each Monte Carlo trial gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (trial_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trial indices uniformly across the seed space.
//! This means:
//!
//! - Trials never share RNG state, so they can run on separate Rayon workers
//!   with no synchronisation and no ordering dependency.
//! - Re-running trial `k` alone reproduces exactly the trial `k` of a full
//!   sweep — runs are reproducible even when the trial count changes.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-trial deterministic RNG.
///
/// Create one per trial; every sampler and policy in that trial draws from
/// it.  The type is `!Sync` to prevent accidental sharing across threads —
/// each parallel trial must own its own instance.
pub struct TrialRng(SmallRng);

impl TrialRng {
    /// Seed deterministically from the run's global seed and a trial index.
    pub fn new(global_seed: u64, trial: u32) -> Self {
        let seed = global_seed ^ (trial as u64).wrapping_mul(MIXING_CONSTANT);
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, bypassing trial mixing (single-trial runs, tests).
    pub fn from_seed(seed: u64) -> Self {
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` adaptors.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Draw one value from an arbitrary distribution (`rand_distr` types).
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
