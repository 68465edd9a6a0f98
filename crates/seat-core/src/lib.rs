//! `seat-core` — foundational types for the seatsim queueing simulator.
//!
//! This crate is a dependency of every other `seat-*` crate.  It intentionally
//! has no `seat-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `TableId`, `PartyId`, `SectionId`                 |
//! | [`time`]    | `SimTime` — absolute simulated seconds            |
//! | [`party`]   | `Party` — one arriving group                      |
//! | [`rng`]     | `TrialRng` — deterministic per-trial RNG          |
//! | [`config`]  | `SimConfig` — horizon, seed, trial count          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod ids;
pub mod party;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use ids::{PartyId, SectionId, TableId};
pub use party::Party;
pub use rng::TrialRng;
pub use time::SimTime;
