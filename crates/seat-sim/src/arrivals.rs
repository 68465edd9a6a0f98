//! Sampler seams: the external collaborators that feed the event loop.
//!
//! Each seam is a one-method trait with a blanket impl for closures, so
//! production code plugs in the distributions from [`sampling`][crate::sampling]
//! while tests replay fixed sequences:
//!
//! ```rust,ignore
//! let mut script = vec![Arrival { size: 2, at: SimTime(60) }, /* … */].into_iter();
//! let arrivals = move |_now, _rng: &mut TrialRng| script.next().unwrap();
//! ```

use seat_core::{SimTime, TrialRng};

// ── Arrival stream ────────────────────────────────────────────────────────────

/// One generated arrival: a party of `size` walks in at absolute time `at`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub size: u32,
    pub at:   SimTime,
}

/// A lazy, infinite stream of arrivals.
///
/// Called with the current time after each arrival is admitted; must return
/// a strictly later `at` so simulated time advances.  The loop stops calling
/// once an arrival lands at or beyond the horizon.
pub trait ArrivalSource {
    fn next_arrival(&mut self, now: SimTime, rng: &mut TrialRng) -> Arrival;
}

impl<F> ArrivalSource for F
where
    F: FnMut(SimTime, &mut TrialRng) -> Arrival,
{
    fn next_arrival(&mut self, now: SimTime, rng: &mut TrialRng) -> Arrival {
        self(now, rng)
    }
}

// ── Service durations ─────────────────────────────────────────────────────────

/// Samples how long a party of `size` will occupy its tables, in seconds.
/// Called once per party, at arrival.
pub trait ServiceSource {
    fn service_secs(&mut self, size: u32, rng: &mut TrialRng) -> u64;
}

impl<F> ServiceSource for F
where
    F: FnMut(u32, &mut TrialRng) -> u64,
{
    fn service_secs(&mut self, size: u32, rng: &mut TrialRng) -> u64 {
        self(size, rng)
    }
}

// ── Patience ──────────────────────────────────────────────────────────────────

/// Samples the absolute deadline after which a party arriving at `now`
/// leaves the queue unseated.  `None` means the party waits forever.
pub trait PatienceSource {
    fn deadline(&mut self, now: SimTime, rng: &mut TrialRng) -> Option<SimTime>;
}

impl<F> PatienceSource for F
where
    F: FnMut(SimTime, &mut TrialRng) -> Option<SimTime>,
{
    fn deadline(&mut self, now: SimTime, rng: &mut TrialRng) -> Option<SimTime> {
        self(now, rng)
    }
}

/// The default patience model: nobody ever gives up.
#[derive(Default)]
pub struct InfinitePatience;

impl PatienceSource for InfinitePatience {
    fn deadline(&mut self, _now: SimTime, _rng: &mut TrialRng) -> Option<SimTime> {
        None
    }
}
