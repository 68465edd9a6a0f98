//! Simulation time model.
//!
//! # Design
//!
//! Time is an absolute count of simulated seconds since the doors opened,
//! stored as `u64`.  The arrival, service, and patience samplers all produce
//! continuous variates; they quantize to whole seconds at the boundary, so
//! every comparison inside the engine is exact integer arithmetic — no
//! floating-point drift in the departure schedule, and a total order for the
//! schedule's heap comparator.
//!
//! "No pending departure" is represented by the [`SimTime::FAR_FUTURE`]
//! sentinel (`u64::MAX`) rather than an `Option`, so the event loop's
//! earlier-of-two-streams comparison stays branch-free: any real event time
//! compares less than an empty schedule.

use std::fmt;

/// An absolute simulation timestamp, in whole simulated seconds.
///
/// One-second resolution is far below anything a seating process can
/// resolve; a `u64` of seconds outlasts any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    /// The moment the doors open.
    pub const ZERO: SimTime = SimTime(0);

    /// Sentinel for "no pending event" — later than every real timestamp.
    pub const FAR_FUTURE: SimTime = SimTime(u64::MAX);

    /// Construct from whole minutes.
    #[inline]
    pub const fn from_mins(mins: u64) -> SimTime {
        SimTime(mins * 60)
    }

    /// Construct from whole hours.
    #[inline]
    pub const fn from_hours(hours: u64) -> SimTime {
        SimTime(hours * 3_600)
    }

    /// The timestamp `secs` seconds after `self`.
    ///
    /// Saturates at [`FAR_FUTURE`][Self::FAR_FUTURE] so offsetting the
    /// sentinel keeps it a sentinel.
    #[inline]
    pub fn offset(self, secs: u64) -> SimTime {
        SimTime(self.0.saturating_add(secs))
    }

    /// Seconds elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0 - earlier.0
    }

    /// `true` for the [`FAR_FUTURE`][Self::FAR_FUTURE] sentinel.
    #[inline]
    pub fn is_far_future(self) -> bool {
        self.0 == u64::MAX
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    /// `HH:MM:SS` from the start of the trial; the sentinel prints as `never`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_far_future() {
            return write!(f, "never");
        }
        let h = self.0 / 3_600;
        let m = (self.0 % 3_600) / 60;
        let s = self.0 % 60;
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}
