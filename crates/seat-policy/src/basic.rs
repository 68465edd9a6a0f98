//! The single-table policies: first-fit scans with different predicates.

use rustc_hash::FxHashSet;

use seat_core::{Party, SimTime, TableId, TrialRng};
use seat_floor::FreeTable;

use crate::{Pairing, SeatingPolicy};

/// First table in `order` that is unclaimed and satisfies `pred`; claims it.
fn claim_first(
    order: &[FreeTable],
    used:  &mut FxHashSet<TableId>,
    pred:  impl Fn(&FreeTable) -> bool,
) -> Option<TableId> {
    let table = order.iter().find(|t| !used.contains(&t.id) && pred(t))?;
    used.insert(table.id);
    Some(table.id)
}

// ── SeatAnywhere ──────────────────────────────────────────────────────────────

/// Baseline policy: the first free table big enough, in snapshot order.
///
/// [`shuffled()`][Self::shuffled] randomizes the scan order per call with
/// the trial RNG instead, which spreads wear across the floor without
/// sacrificing per-seed determinism.
#[derive(Default)]
pub struct SeatAnywhere {
    shuffle: bool,
}

impl SeatAnywhere {
    pub fn new() -> Self {
        Self { shuffle: false }
    }

    pub fn shuffled() -> Self {
        Self { shuffle: true }
    }
}

impl SeatingPolicy for SeatAnywhere {
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        _now:    SimTime,
        rng:     &mut TrialRng,
    ) -> Vec<Pairing> {
        let mut order = free.to_vec();
        if self.shuffle {
            rng.shuffle(&mut order);
        }

        let mut used = FxHashSet::default();
        let mut pairings = Vec::new();
        for party in waiting {
            if let Some(id) = claim_first(&order, &mut used, |t| t.capacity >= party.size) {
                pairings.push(Pairing::single(id, party.id));
            }
        }
        pairings
    }
}

// ── TightFit ──────────────────────────────────────────────────────────────────

/// Wasted-seat minimizer: only accepts a table within one seat of the party
/// size — except that any table larger than `overflow_above` is accepted
/// unconditionally, so big parties are not starved when no tight match
/// exists.
pub struct TightFit {
    overflow_above: u32,
}

impl TightFit {
    pub fn new() -> Self {
        Self { overflow_above: 6 }
    }

    /// Override the escape-valve threshold (tables with capacity strictly
    /// greater match any party).
    pub fn with_overflow_above(overflow_above: u32) -> Self {
        Self { overflow_above }
    }
}

impl Default for TightFit {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatingPolicy for TightFit {
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        _now:    SimTime,
        _rng:    &mut TrialRng,
    ) -> Vec<Pairing> {
        let mut used = FxHashSet::default();
        let mut pairings = Vec::new();
        for party in waiting {
            let fits = |t: &FreeTable| {
                (t.capacity >= party.size && t.capacity <= party.size + 1)
                    || t.capacity > self.overflow_above
            };
            if let Some(id) = claim_first(free, &mut used, fits) {
                pairings.push(Pairing::single(id, party.id));
            }
        }
        pairings
    }
}

// ── SmallestAvailable ─────────────────────────────────────────────────────────

/// Wasted-seat minimizer, deterministic variant: tables are scanned in
/// ascending capacity order (ties by id), so each party gets the smallest
/// free table that fits it.
#[derive(Default)]
pub struct SmallestAvailable;

impl SmallestAvailable {
    pub fn new() -> Self {
        Self
    }
}

impl SeatingPolicy for SmallestAvailable {
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        _now:    SimTime,
        _rng:    &mut TrialRng,
    ) -> Vec<Pairing> {
        let mut order = free.to_vec();
        order.sort_by_key(|t| (t.capacity, t.id));

        let mut used = FxHashSet::default();
        let mut pairings = Vec::new();
        for party in waiting {
            if let Some(id) = claim_first(&order, &mut used, |t| t.capacity >= party.size) {
                pairings.push(Pairing::single(id, party.id));
            }
        }
        pairings
    }
}

// ── SmallParties ──────────────────────────────────────────────────────────────

/// [`SeatAnywhere`] that refuses any party larger than `max_size` — bigger
/// groups are simply never proposed and wait until they give up or the
/// trial ends.
pub struct SmallParties {
    max_size: u32,
}

impl SmallParties {
    pub fn new() -> Self {
        Self { max_size: 5 }
    }

    pub fn with_max_size(max_size: u32) -> Self {
        Self { max_size }
    }
}

impl Default for SmallParties {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatingPolicy for SmallParties {
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        _now:    SimTime,
        _rng:    &mut TrialRng,
    ) -> Vec<Pairing> {
        let mut used = FxHashSet::default();
        let mut pairings = Vec::new();
        for party in waiting {
            if party.size > self.max_size {
                continue;
            }
            if let Some(id) = claim_first(free, &mut used, |t| t.capacity >= party.size) {
                pairings.push(Pairing::single(id, party.id));
            }
        }
        pairings
    }
}
