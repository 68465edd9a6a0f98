//! `SmallestCombining` — the multi-table matching heuristic.
//!
//! # Matching passes
//!
//! For each waiting party, in arrival order:
//!
//! 1. **Single table** — candidates in ascending capacity order starting at
//!    the party's size; first free table wins.
//! 2. **Two tables** — anchors in descending capacity order, skipping
//!    anchors held for a *different* party; the anchor pairs with its first
//!    free neighbor whose capacity closes the gap.
//! 3. **Three tables** — anchors in descending capacity order (same hold
//!    rule); the anchor plus two distinct free neighbors whose combined
//!    capacity suffices.
//!
//! A party all three passes fail for stays in the queue; by default the
//! scan moves on to the next party ([`halt_on_miss`][SmallestCombining::halt_on_miss]
//! switches to the stop-the-batch variant).
//!
//! # Holds
//!
//! A party left unmatched registers a *hold* on the largest free table not
//! already held by another party, reserving that anchor for a future
//! combination.  Holds are an explicit table → party map: held anchors are
//! skipped in the combining passes for everyone else, and a hold is dropped
//! the moment its party leaves the waiting set (seated, reneged, or
//! abandoned).

use rustc_hash::{FxHashMap, FxHashSet};

use seat_core::{Party, PartyId, SimTime, TableId, TrialRng};
use seat_floor::{FloorPlan, FreeTable};

use crate::{Pairing, SeatingPolicy};

/// The combining policy.  Stateful (holds persist across calls); build a
/// fresh instance per trial from the trial's plan.
pub struct SmallestCombining {
    /// Table capacity by id, copied from the plan.
    capacities: Vec<u32>,

    /// Sorted neighbor lists by id, copied from the plan.
    neighbors: Vec<Vec<TableId>>,

    /// All table ids, ascending by `(capacity, id)` — the single-table scan
    /// order; reversed, the anchor scan order.
    by_capacity: Vec<TableId>,

    /// Tables provisionally reserved for a still-waiting party.
    holds: FxHashMap<TableId, PartyId>,

    /// When `true`, the first unseatable party stops the batch.
    halt_on_miss: bool,
}

impl SmallestCombining {
    pub fn new(plan: &FloorPlan) -> Self {
        let capacities: Vec<u32> = plan.iter().map(|(_, t)| t.capacity).collect();
        let neighbors: Vec<Vec<TableId>> =
            plan.iter().map(|(_, t)| t.neighbors.clone()).collect();

        let mut by_capacity: Vec<TableId> = plan.iter().map(|(id, _)| id).collect();
        by_capacity.sort_by_key(|id| (capacities[id.index()], *id));

        Self {
            capacities,
            neighbors,
            by_capacity,
            holds: FxHashMap::default(),
            halt_on_miss: false,
        }
    }

    /// Stop scanning the rest of the batch once one party cannot be seated.
    pub fn halt_on_miss(mut self, halt: bool) -> Self {
        self.halt_on_miss = halt;
        self
    }

    #[inline]
    fn capacity(&self, id: TableId) -> u32 {
        self.capacities[id.index()]
    }

    /// `true` if `table` is held for someone other than `party`.
    #[inline]
    fn held_for_other(&self, table: TableId, party: PartyId) -> bool {
        matches!(self.holds.get(&table), Some(&holder) if holder != party)
    }

    /// Run the three matching passes for one party against `free`.
    fn find_tables(&self, party: &Party, free: &FxHashSet<TableId>) -> Option<Vec<TableId>> {
        // Pass 1: smallest single table that fits.
        for &id in &self.by_capacity {
            if self.capacity(id) >= party.size && free.contains(&id) {
                return Some(vec![id]);
            }
        }

        // Pass 2: anchor + one neighbor.
        for &anchor in self.by_capacity.iter().rev() {
            if !free.contains(&anchor) || self.held_for_other(anchor, party.id) {
                continue;
            }
            let anchor_cap = self.capacity(anchor);
            for &n in &self.neighbors[anchor.index()] {
                if free.contains(&n) && anchor_cap + self.capacity(n) >= party.size {
                    return Some(vec![anchor, n]);
                }
            }
        }

        // Pass 3: anchor + two distinct neighbors.
        for &anchor in self.by_capacity.iter().rev() {
            if !free.contains(&anchor) || self.held_for_other(anchor, party.id) {
                continue;
            }
            let anchor_cap = self.capacity(anchor);
            let ns = &self.neighbors[anchor.index()];
            for (i, &n1) in ns.iter().enumerate() {
                if !free.contains(&n1) {
                    continue;
                }
                for &n2 in &ns[i + 1..] {
                    if free.contains(&n2)
                        && anchor_cap + self.capacity(n1) + self.capacity(n2) >= party.size
                    {
                        return Some(vec![anchor, n1, n2]);
                    }
                }
            }
        }

        None
    }

    /// Reserve the largest free table without a competing hold for `party`.
    fn place_hold(&mut self, party: PartyId, free: &FxHashSet<TableId>) {
        for &id in self.by_capacity.iter().rev() {
            if free.contains(&id) && !self.held_for_other(id, party) {
                self.holds.insert(id, party);
                return;
            }
        }
    }
}

impl SeatingPolicy for SmallestCombining {
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        _now:    SimTime,
        _rng:    &mut TrialRng,
    ) -> Vec<Pairing> {
        // Holds for parties that left the queue are released up front.
        let waiting_ids: FxHashSet<PartyId> = waiting.iter().map(|p| p.id).collect();
        self.holds.retain(|_, holder| waiting_ids.contains(holder));

        let mut free_ids: FxHashSet<TableId> = free.iter().map(|f| f.id).collect();
        let mut pairings = Vec::new();

        for party in waiting {
            match self.find_tables(party, &free_ids) {
                Some(tables) => {
                    for &id in &tables {
                        free_ids.remove(&id);
                    }
                    // Fully seated: release whatever this party was holding.
                    self.holds.retain(|_, holder| *holder != party.id);
                    pairings.push(Pairing {
                        tables,
                        party: party.id,
                    });
                }
                None => {
                    self.place_hold(party.id, &free_ids);
                    if self.halt_on_miss {
                        break;
                    }
                }
            }
        }

        pairings
    }
}
