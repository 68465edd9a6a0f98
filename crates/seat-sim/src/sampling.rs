//! Concrete samplers: party-size mix, arrival processes, service times,
//! and patience.
//!
//! All continuous variates are quantized to whole seconds at this boundary
//! (see `seat_core::time`): inter-arrival gaps round up to ≥ 1 s so time
//! strictly advances, and service times clamp to a 5-minute floor because a
//! normal variate can stray below zero.

use rand_distr::{Exp1, StandardNormal};

use seat_core::{SimTime, TrialRng};

use crate::arrivals::{Arrival, ArrivalSource, PatienceSource, ServiceSource};

// ── SizeMix ───────────────────────────────────────────────────────────────────

/// Party-size distribution: a cumulative-weight table sampled by inverse
/// transform.
#[derive(Clone, Debug)]
pub struct SizeMix {
    /// `(cumulative probability, size)`, ascending; last entry is 1.0.
    cumulative: Vec<(f64, u32)>,
}

impl SizeMix {
    /// Build from `(size, weight)` pairs; weights are normalized.
    ///
    /// # Panics
    /// Panics in debug mode if `entries` is empty or all weights are 0.
    pub fn new(entries: &[(u32, f64)]) -> Self {
        debug_assert!(!entries.is_empty());
        let total: f64 = entries.iter().map(|(_, w)| w).sum();
        debug_assert!(total > 0.0);

        let mut acc = 0.0;
        let mut cumulative: Vec<(f64, u32)> = entries
            .iter()
            .map(|&(size, w)| {
                acc += w / total;
                (acc, size)
            })
            .collect();
        // Guard the tail against accumulated rounding.
        if let Some(last) = cumulative.last_mut() {
            last.0 = 1.0;
        }
        Self { cumulative }
    }

    /// A typical dinner-service mix: couples dominate, four-tops are common,
    /// parties above six are rare.
    pub fn evening_default() -> Self {
        Self::new(&[
            (1, 0.10),
            (2, 0.35),
            (3, 0.15),
            (4, 0.20),
            (5, 0.08),
            (6, 0.07),
            (7, 0.03),
            (8, 0.02),
        ])
    }

    /// Draw one party size.
    pub fn sample(&self, rng: &mut TrialRng) -> u32 {
        let u: f64 = rng.random();
        for &(cum, size) in &self.cumulative {
            if u <= cum {
                return size;
            }
        }
        // Unreachable with a well-formed table; fall back to the largest.
        self.cumulative[self.cumulative.len() - 1].1
    }
}

// ── ConstantRate ──────────────────────────────────────────────────────────────

/// Poisson arrivals at a fixed rate: exponential gaps with the given mean.
pub struct ConstantRate {
    mean_gap_secs: f64,
    sizes:         SizeMix,
}

impl ConstantRate {
    pub fn new(mean_gap_secs: f64, sizes: SizeMix) -> Self {
        Self { mean_gap_secs, sizes }
    }
}

impl ArrivalSource for ConstantRate {
    fn next_arrival(&mut self, now: SimTime, rng: &mut TrialRng) -> Arrival {
        let gap: f64 = self.mean_gap_secs * rng.sample::<f64, _>(&Exp1);
        Arrival {
            size: self.sizes.sample(rng),
            at:   now.offset((gap.round() as u64).max(1)),
        }
    }
}

// ── PeakRate ──────────────────────────────────────────────────────────────────

/// Poisson arrivals with a trapezoidal rate profile: quiet at open, a linear
/// ramp up to the dinner rush, a plateau, and a ramp back down before close.
///
/// The mean inter-arrival gap at time `t`:
///
/// ```text
///        open      ramp        plateau          ramp      close
/// gap:  base ──▶ base→peak ──▶  peak  ──▶    peak→base ──▶ base
///       t ≤ peak_start       until horizon - peak_end - ramp
/// ```
pub struct PeakRate {
    /// Mean gap outside the rush, seconds.
    base_gap_secs: f64,
    /// Mean gap at the height of the rush, seconds (smaller = busier).
    peak_gap_secs: f64,
    /// When the ramp-up begins.
    peak_start_secs: f64,
    /// Length of each ramp.
    ramp_secs: f64,
    /// Quiet tail before the horizon, after the ramp-down completes.
    peak_end_secs: f64,
    /// The arrival horizon the profile is anchored to.
    horizon_secs: f64,
    sizes: SizeMix,
}

impl PeakRate {
    pub fn new(
        base_gap_secs:   f64,
        peak_gap_secs:   f64,
        peak_start_secs: f64,
        ramp_secs:       f64,
        peak_end_secs:   f64,
        horizon_secs:    f64,
        sizes:           SizeMix,
    ) -> Self {
        Self {
            base_gap_secs,
            peak_gap_secs,
            peak_start_secs,
            ramp_secs,
            peak_end_secs,
            horizon_secs,
            sizes,
        }
    }

    /// The mean inter-arrival gap at absolute time `t`.
    fn mean_gap_at(&self, t: f64) -> f64 {
        let ramp_up_end = self.peak_start_secs + self.ramp_secs;
        let ramp_down_start = self.horizon_secs - self.peak_end_secs - self.ramp_secs;
        let ramp_down_end = self.horizon_secs - self.peak_end_secs;

        if t <= self.peak_start_secs {
            self.base_gap_secs
        } else if t <= ramp_up_end {
            let frac = (t - self.peak_start_secs) / self.ramp_secs;
            self.base_gap_secs - frac * (self.base_gap_secs - self.peak_gap_secs)
        } else if t <= ramp_down_start {
            self.peak_gap_secs
        } else if t <= ramp_down_end {
            let frac = (t - ramp_down_start) / self.ramp_secs;
            self.peak_gap_secs + frac * (self.base_gap_secs - self.peak_gap_secs)
        } else {
            self.base_gap_secs
        }
    }
}

impl ArrivalSource for PeakRate {
    fn next_arrival(&mut self, now: SimTime, rng: &mut TrialRng) -> Arrival {
        let mean = self.mean_gap_at(now.0 as f64);
        let gap: f64 = mean * rng.sample::<f64, _>(&Exp1);
        Arrival {
            size: self.sizes.sample(rng),
            at:   now.offset((gap.round() as u64).max(1)),
        }
    }
}

// ── NormalService ─────────────────────────────────────────────────────────────

/// Normally distributed service times with per-size mean/σ in *minutes*.
///
/// Sizes beyond the table reuse its last row, so a nine-top served from an
/// eight-row table behaves like an eight-top.
pub struct NormalService {
    /// `(mean minutes, σ minutes)` indexed by `size - 1`.
    per_size: Vec<(f64, f64)>,
}

/// Nothing turns a table faster than this, whatever the variate says.
const SERVICE_FLOOR_SECS: u64 = 300;

impl NormalService {
    /// # Panics
    /// Panics in debug mode if `per_size` is empty.
    pub fn new(per_size: Vec<(f64, f64)>) -> Self {
        debug_assert!(!per_size.is_empty());
        Self { per_size }
    }

    /// A typical dinner-service profile: bigger parties linger longer.
    pub fn evening_default() -> Self {
        Self::new(vec![
            (35.0, 10.0),
            (45.0, 12.0),
            (55.0, 14.0),
            (60.0, 15.0),
            (70.0, 16.0),
            (75.0, 18.0),
            (85.0, 20.0),
            (90.0, 20.0),
        ])
    }
}

impl ServiceSource for NormalService {
    fn service_secs(&mut self, size: u32, rng: &mut TrialRng) -> u64 {
        let idx = (size.max(1) as usize - 1).min(self.per_size.len() - 1);
        let (mean_mins, sigma_mins) = self.per_size[idx];
        let mins = mean_mins + sigma_mins * rng.sample::<f64, _>(&StandardNormal);
        ((mins * 60.0).round() as u64).max(SERVICE_FLOOR_SECS)
    }
}

// ── ExpPatience ───────────────────────────────────────────────────────────────

/// Exponentially distributed patience with the given mean: each party's
/// renege deadline is `now + Exp(mean)`.
pub struct ExpPatience {
    mean_secs: f64,
}

impl ExpPatience {
    pub fn new(mean_secs: f64) -> Self {
        Self { mean_secs }
    }
}

impl PatienceSource for ExpPatience {
    fn deadline(&mut self, now: SimTime, rng: &mut TrialRng) -> Option<SimTime> {
        let wait: f64 = self.mean_secs * rng.sample::<f64, _>(&Exp1);
        Some(now.offset((wait.round() as u64).max(1)))
    }
}
