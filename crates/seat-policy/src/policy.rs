//! The `SeatingPolicy` trait — the main extension point for seating logic.

use seat_core::{Party, SimTime, TrialRng};
use seat_floor::FreeTable;

use crate::Pairing;

/// Pluggable seating logic.
///
/// Implement this trait to define how waiting parties are matched to free
/// tables at each event.  The simulation loop calls
/// [`propose`][Self::propose] with the wait queue in arrival order and a
/// fresh free-table snapshot, then commits each returned pairing through the
/// floor ledger — the policy itself never mutates floor or queue state.
///
/// # Contract
///
/// Within one call the returned pairings must not reuse a table or name a
/// party twice, and every pairing must actually fit (combined capacity ≥
/// party size; in neighbor-only trials, a connected table set).  Violations
/// are surfaced by the ledger as errors that abort the trial — they are
/// policy bugs, not runtime conditions.
///
/// # State
///
/// Policies that balance across calls keep their own fields (`&mut self`);
/// construct a fresh instance per trial so Monte Carlo trials stay
/// independent.  `rng` is the trial's RNG, threaded through so stochastic
/// policies stay deterministic per seed.
pub trait SeatingPolicy {
    /// Propose seatings for `waiting` (arrival order) against `free`.
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        now:     SimTime,
        rng:     &mut TrialRng,
    ) -> Vec<Pairing>;
}
