//! `seat-floor` — the dining room: table graph, occupancy, and departures.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`layout`]   | `Table`, `FloorPlan`, `FloorPlanBuilder`                  |
//! | [`schedule`] | `DepartureSchedule` — min-heap of pending departures      |
//! | [`ledger`]   | `Floor`, `FreeTable` — occupancy state and seat/pop ops   |
//! | [`loader`]   | `load_floor_csv`, `load_floor_reader`                     |
//! | [`error`]    | `FloorError`, `LoadError`                                 |
//!
//! # Occupancy model (summary)
//!
//! A table is Free or Occupied; the only transitions are
//!
//! ```text
//! Free ──seat()── Occupied ──pop_departure()── Free
//! ```
//!
//! `seat()` validates capacity, occupancy, and (in neighbor-only mode)
//! adjacency-connectivity *before* mutating anything, so a failed call leaves
//! the floor untouched.  A multi-table seating pushes one schedule entry per
//! table, all at the same departure time; `pop_departure()` drains the whole
//! group atomically so the invariant "occupied tables = tables with a pending
//! entry" holds at every event boundary.

pub mod error;
pub mod layout;
pub mod ledger;
pub mod loader;
pub mod schedule;


pub use error::{FloorError, FloorResult, LoadError};
pub use layout::{FloorPlan, FloorPlanBuilder, Table};
pub use ledger::{Floor, FreeTable};
pub use loader::{load_floor_csv, load_floor_reader};
pub use schedule::DepartureSchedule;
