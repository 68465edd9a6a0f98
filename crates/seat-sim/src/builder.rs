//! Fluent builder for constructing a [`Sim`].

use seat_core::{SimConfig, TrialRng};
use seat_floor::Floor;
use seat_policy::SeatingPolicy;

use crate::arrivals::{ArrivalSource, InfinitePatience, PatienceSource, ServiceSource};
use crate::Sim;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — horizon, seed, neighbor-only flag
/// - [`Floor`] — a fresh floor for this trial
/// - `P: SeatingPolicy`, `A: ArrivalSource`, `S: ServiceSource`
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                |
/// |-----------------|----------------------------------------|
/// | `.patience(t)`  | [`InfinitePatience`] (nobody reneges)  |
/// | `.trial(k)`     | 0 — the RNG is seeded from `(seed, k)` |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config, floor, SmallestCombining::new(&plan), arrivals, service)
///     .patience(ExpPatience::new(1_200.0))
///     .trial(k)
///     .build();
/// let log = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P, A, S, T = InfinitePatience> {
    config:   SimConfig,
    floor:    Floor,
    policy:   P,
    arrivals: A,
    service:  S,
    patience: T,
    trial:    u32,
}

impl<P, A, S> SimBuilder<P, A, S, InfinitePatience> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, floor: Floor, policy: P, arrivals: A, service: S) -> Self {
        Self {
            config,
            floor,
            policy,
            arrivals,
            service,
            patience: InfinitePatience,
            trial: 0,
        }
    }
}

impl<P, A, S, T> SimBuilder<P, A, S, T> {
    /// Supply a patience model (replaces the never-renege default).
    pub fn patience<T2: PatienceSource>(self, patience: T2) -> SimBuilder<P, A, S, T2> {
        SimBuilder {
            config:   self.config,
            floor:    self.floor,
            policy:   self.policy,
            arrivals: self.arrivals,
            service:  self.service,
            patience,
            trial:    self.trial,
        }
    }

    /// Set the trial index this run represents; mixed into the RNG seed so
    /// every trial of a sweep draws an independent stream.
    pub fn trial(mut self, trial: u32) -> Self {
        self.trial = trial;
        self
    }

    /// Build a ready-to-run [`Sim`].
    pub fn build(self) -> Sim<P, A, S, T>
    where
        P: SeatingPolicy,
        A: ArrivalSource,
        S: ServiceSource,
        T: PatienceSource,
    {
        let rng = TrialRng::new(self.config.seed, self.trial);
        Sim::new(
            self.config,
            self.floor,
            self.policy,
            self.arrivals,
            self.service,
            self.patience,
            rng,
        )
    }
}
