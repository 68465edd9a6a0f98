//! Monte Carlo outer loop.
//!
//! Trials are mutually independent: each one builds its own floor, policy,
//! samplers, and RNG from the factory, runs to completion, and only the
//! resulting logs are merged.  That makes the sweep a pure fan-out — enable
//! the `parallel` Cargo feature to run it on Rayon's thread pool.

use seat_policy::SeatingPolicy;

use crate::arrivals::{ArrivalSource, PatienceSource, ServiceSource};
use crate::{NoopObserver, Sim, SimResult, TrialLog};

/// Run `trials` independent trials and return their logs in trial order.
///
/// `build` is called once per trial with the trial index; it must construct
/// a completely fresh [`Sim`] (typically via
/// [`SimBuilder::trial`][crate::SimBuilder::trial] so RNG streams differ per
/// trial).  The first trial error aborts the sweep — a floor precondition
/// failure is a policy bug that would taint every trial the same way.
pub fn run_trials<P, A, S, T, F>(trials: u32, build: F) -> SimResult<Vec<TrialLog>>
where
    P: SeatingPolicy,
    A: ArrivalSource,
    S: ServiceSource,
    T: PatienceSource,
    F: Fn(u32) -> Sim<P, A, S, T> + Send + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        (0..trials)
            .map(|k| build(k).run(&mut NoopObserver))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Each worker constructs and consumes its own Sim; only the logs
        // cross threads.  Collecting into Result keeps trial order.
        (0..trials)
            .into_par_iter()
            .map(|k| build(k).run(&mut NoopObserver))
            .collect()
    }
}
