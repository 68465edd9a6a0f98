//! `Pairing` — a proposed seating.

use seat_core::{PartyId, TableId};

/// An ephemeral proposal pairing one party with one or more tables.
///
/// Produced by a [`SeatingPolicy`][crate::SeatingPolicy]; committed (and
/// validated) by the simulation loop via the floor's `seat` operation.  A
/// pairing is only meaningful against the snapshot it was proposed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pairing {
    /// The tables to combine; one entry for a plain single-table seating.
    pub tables: Vec<TableId>,

    /// The party they would serve.
    pub party: PartyId,
}

impl Pairing {
    /// Convenience constructor for the common single-table case.
    pub fn single(table: TableId, party: PartyId) -> Self {
        Self {
            tables: vec![table],
            party,
        }
    }
}
