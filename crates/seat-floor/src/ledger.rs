//! The `Floor` — per-trial occupancy ledger over an immutable plan.

use seat_core::{Party, PartyId, SectionId, SimTime, TableId};

use crate::schedule::DepartureSchedule;
use crate::{FloorError, FloorPlan, FloorResult};

// ── FreeTable ─────────────────────────────────────────────────────────────────

/// One row of the free-table snapshot handed to seating policies.
///
/// A snapshot is only valid until the next mutation of the floor; policies
/// receive a fresh one at every event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FreeTable {
    pub id:       TableId,
    pub capacity: u32,
    pub section:  SectionId,
}

// ── Floor ─────────────────────────────────────────────────────────────────────

/// Runtime table state for one trial: who occupies what, and when each
/// occupied table frees up.
///
/// Owned and mutated exclusively by the simulation loop; policies only ever
/// see read-only [`FreeTable`] snapshots.  Each Monte Carlo trial constructs
/// its own `Floor` from a cloned plan.
pub struct Floor {
    plan: FloorPlan,

    /// Current occupant per table, indexed by `TableId`.  `None` = Free.
    occupants: Vec<Option<PartyId>>,

    schedule: DepartureSchedule,

    /// When `true`, `seat()` rejects multi-table combinations that are not
    /// connected under the plan's adjacency relation.  Fixed for the trial.
    neighbor_only: bool,
}

impl Floor {
    pub fn new(plan: FloorPlan, neighbor_only: bool) -> Self {
        let occupants = vec![None; plan.len()];
        Self {
            plan,
            occupants,
            schedule: DepartureSchedule::new(),
            neighbor_only,
        }
    }

    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Snapshot of every free table as `(id, capacity, section)`, in id
    /// order.  Invalidated by any subsequent `seat`/`pop_departure`.
    pub fn available_tables(&self) -> Vec<FreeTable> {
        self.plan
            .iter()
            .filter(|(id, _)| self.occupants[id.index()].is_none())
            .map(|(id, t)| FreeTable {
                id,
                capacity: t.capacity,
                section:  t.section,
            })
            .collect()
    }

    #[inline]
    pub fn is_free(&self, id: TableId) -> bool {
        self.occupants[id.index()].is_none()
    }

    #[inline]
    pub fn occupant(&self, id: TableId) -> Option<PartyId> {
        self.occupants[id.index()]
    }

    /// Number of currently occupied tables.
    pub fn occupied_count(&self) -> usize {
        self.occupants.iter().filter(|o| o.is_some()).count()
    }

    /// `true` iff no departures are pending (every table is free).
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    /// The earliest pending departure time, or [`SimTime::FAR_FUTURE`] when
    /// the floor is empty.
    pub fn next_departure(&self) -> SimTime {
        self.schedule.next_time()
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Seat `party` across `tables`, scheduling its departure at
    /// `now + party.service_secs`.
    ///
    /// All validation happens before any mutation, so a failed call leaves
    /// the floor untouched.  Returns the new earliest pending departure time.
    ///
    /// # Errors
    ///
    /// - [`FloorError::Capacity`] if the combined capacity is below the
    ///   party size (this also covers an empty `tables` slice).
    /// - [`FloorError::Occupied`] if a named table is occupied or named
    ///   twice.
    /// - [`FloorError::NotAdjacent`] in neighbor-only mode, if the named
    ///   tables do not form one connected set.
    pub fn seat(
        &mut self,
        tables: &[TableId],
        party:  Party,
        now:    SimTime,
    ) -> FloorResult<SimTime> {
        let combined: u32 = tables
            .iter()
            .map(|id| self.plan.table(*id).capacity)
            .sum();
        if combined < party.size {
            return Err(FloorError::Capacity {
                party: party.id,
                size:  party.size,
                combined,
            });
        }

        for (i, &id) in tables.iter().enumerate() {
            if self.occupants[id.index()].is_some() || tables[..i].contains(&id) {
                return Err(FloorError::Occupied(id));
            }
        }

        if self.neighbor_only && tables.len() > 1 {
            self.check_connected(tables)?;
        }

        let departs = party.departs_at(now);
        for &id in tables {
            self.occupants[id.index()] = Some(party.id);
            self.schedule.push(departs, id, party);
        }

        Ok(self.schedule.next_time())
    }

    /// Process the earliest pending departure: free its table, then drain
    /// every further entry of the same party (a multi-table seating frees
    /// all of its tables atomically).  Returns the departing party.
    ///
    /// # Errors
    ///
    /// [`FloorError::EmptySchedule`] if no departures are pending.  Use
    /// [`next_departure`](Self::next_departure) to probe without failing.
    pub fn pop_departure(&mut self) -> FloorResult<Party> {
        let Some((_, table, party)) = self.schedule.pop() else {
            return Err(FloorError::EmptySchedule);
        };
        self.occupants[table.index()] = None;

        // Same-party entries share a departure time and consecutive sequence
        // numbers, so they sit adjacent at the head of the schedule.
        while self.schedule.peek_party() == Some(party.id) {
            if let Some((_, t, _)) = self.schedule.pop() {
                self.occupants[t.index()] = None;
            }
        }

        Ok(party)
    }

    // ── Connectivity ──────────────────────────────────────────────────────

    /// Iterative set-growth connectivity check: seed the grown set with the
    /// first named table, then repeatedly absorb any remaining named table
    /// adjacent to the grown set.  Whatever cannot be absorbed is reported.
    fn check_connected(&self, tables: &[TableId]) -> FloorResult<()> {
        let mut grown: Vec<TableId> = vec![tables[0]];
        let mut remaining: Vec<TableId> = tables[1..].to_vec();

        let mut absorbed = true;
        while absorbed && !remaining.is_empty() {
            absorbed = false;
            remaining.retain(|&cand| {
                let touches = grown.iter().any(|&g| self.plan.are_neighbors(g, cand));
                if touches {
                    grown.push(cand);
                    absorbed = true;
                }
                !touches
            });
        }

        if remaining.is_empty() {
            Ok(())
        } else {
            Err(FloorError::NotAdjacent {
                unreachable: remaining,
            })
        }
    }
}
