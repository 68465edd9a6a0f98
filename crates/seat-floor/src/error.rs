//! Error types for seat-floor.

use thiserror::Error;

use seat_core::{PartyId, TableId};

/// Precondition violations raised by [`Floor`][crate::Floor] operations.
///
/// A correct seating policy never produces a pairing that triggers one of
/// these — they indicate a bug in the calling policy or driver, so callers
/// should propagate them and abort the trial rather than recover.
#[derive(Debug, Error)]
pub enum FloorError {
    /// Combined capacity of the named tables is below the party size.
    #[error("party {party} of size {size} does not fit at {combined} combined seats")]
    Capacity {
        party:    PartyId,
        size:     u32,
        combined: u32,
    },

    /// A named table is already occupied (or named twice in one seating).
    #[error("table {0} is not free")]
    Occupied(TableId),

    /// In neighbor-only mode, the named tables do not form one connected
    /// set under the floor plan's adjacency relation.
    #[error("tables {unreachable:?} cannot be joined to the combination")]
    NotAdjacent { unreachable: Vec<TableId> },

    /// `pop_departure` was called with no pending departures.
    #[error("departure schedule is empty")]
    EmptySchedule,
}

/// Shorthand result type for floor operations.
pub type FloorResult<T> = Result<T, FloorError>;

/// Errors from the floor-plan CSV loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("floor plan parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
