//! `seat-sim` — the discrete-event engine for the seatsim workspace.
//!
//! # Event loop
//!
//! ```text
//! while next_arrival.at < horizon:
//!   ① Merge    — take the earlier of next arrival / next departure
//!                (ties go to the arrival).
//!   ② Mutate   — arrival: create the party, enqueue it, advance the stream;
//!                departure: pop it from the floor and log the time.
//!   ③ Purge    — drop every waiting party whose patience expired by now.
//!   ④ Offer    — hand the queue + a fresh free-table snapshot to the
//!                seating policy; commit accepted pairings via Floor::seat.
//! then (Draining):
//!   departures only, no further seatings, until the floor is empty.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | Runs Monte Carlo trials on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seat_core::{SimConfig, TrialRng};
//! use seat_floor::Floor;
//! use seat_policy::SmallestAvailable;
//! use seat_sim::{NoopObserver, PeakRate, NormalService, SimBuilder};
//!
//! let sim = SimBuilder::new(config, floor, SmallestAvailable::new(), arrivals, service)
//!     .patience(ExpPatience::new(20.0 * 60.0))
//!     .build();
//! let log = sim.run(&mut NoopObserver)?;
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod log;
pub mod montecarlo;
pub mod observer;
pub mod queue;
pub mod sampling;
pub mod sim;

#[cfg(test)]
mod tests;

pub use arrivals::{Arrival, ArrivalSource, InfinitePatience, PatienceSource, ServiceSource};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use log::{PartyRecord, TrialLog};
pub use montecarlo::run_trials;
pub use observer::{NoopObserver, SimObserver};
pub use queue::WaitQueue;
pub use sampling::{ConstantRate, ExpPatience, NormalService, PeakRate, SizeMix};
pub use sim::Sim;
