//! Simulation observer trait for progress reporting and data collection.

use seat_core::{Party, PartyId, SimTime, TableId};

use crate::TrialLog;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — wait announcer
///
/// ```rust,ignore
/// struct WaitAnnouncer;
///
/// impl SimObserver for WaitAnnouncer {
///     fn on_seated(&mut self, now: SimTime, party: &Party, tables: &[TableId]) {
///         println!("{now}: party of {} → {} table(s)", party.size, tables.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// A party has walked in and joined the wait queue.
    fn on_arrival(&mut self, _now: SimTime, _party: &Party) {}

    /// A party has been seated at `tables`.
    fn on_seated(&mut self, _now: SimTime, _party: &Party, _tables: &[TableId]) {}

    /// A waiting party gave up at its deadline `at` (≤ the current event time).
    fn on_renege(&mut self, _at: SimTime, _party: PartyId) {}

    /// A seated party has departed, freeing its tables.
    fn on_departure(&mut self, _now: SimTime, _party: &Party) {}

    /// The arrival horizon has passed; only departures remain.
    fn on_close(&mut self, _at: SimTime) {}

    /// The floor has emptied and the trial is finished.
    fn on_trial_end(&mut self, _log: &TrialLog) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
