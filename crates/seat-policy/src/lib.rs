//! `seat-policy` — the seating policies that match waiting parties to tables.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`pairing`]   | `Pairing` — a proposed (table set, party) match              |
//! | [`policy`]    | The `SeatingPolicy` trait                                    |
//! | [`basic`]     | `SeatAnywhere`, `TightFit`, `SmallestAvailable`, `SmallParties` |
//! | [`sections`]  | `RoundRobin`, `FewestPeople` — section-balancing rotation    |
//! | [`combining`] | `SmallestCombining` — multi-table matching over adjacency    |
//!
//! # Design notes
//!
//! Policies *propose*; only the simulation loop *commits*.  A policy never
//! touches the floor or the wait queue — it receives the waiting parties in
//! arrival order plus a free-table snapshot, and returns pairings in which
//! no table or party appears twice.  All policies are greedy and
//! single-pass: each party gets the first table (or combination) satisfying
//! the policy's predicate, with no backtracking within a call.
//!
//! Stateful policies (`RoundRobin`, `FewestPeople`, `SmallestCombining`)
//! carry their balancing counters and hold registries across calls; a fresh
//! instance per trial keeps Monte Carlo trials independent.

pub mod basic;
pub mod combining;
pub mod pairing;
pub mod policy;
pub mod sections;

#[cfg(test)]
mod tests;

pub use basic::{SeatAnywhere, SmallParties, SmallestAvailable, TightFit};
pub use combining::SmallestCombining;
pub use pairing::Pairing;
pub use policy::SeatingPolicy;
pub use sections::{FewestPeople, RoundRobin};
