//! Section-balancing policies: `RoundRobin` and `FewestPeople`.
//!
//! Both share one mechanism: keep the floor's sections in a list ordered by
//! cumulative load, try the least-loaded section first, and after every
//! seating re-insert the section behind all equally-loaded peers.  The
//! section that just received a party therefore goes to the back of its load
//! class, so consecutive seatings spread across the room.  The two policies
//! differ only in the load unit: seating count for `RoundRobin`, seated
//! headcount for `FewestPeople`.

use rustc_hash::FxHashSet;

use seat_core::{Party, SectionId, SimTime, TrialRng};
use seat_floor::{FloorPlan, FreeTable};

use crate::{Pairing, SeatingPolicy};

// ── SectionBalancer ───────────────────────────────────────────────────────────

/// Shared rotation state: `(section, cumulative load)`, kept sorted
/// ascending by load.
struct SectionBalancer {
    sections: Vec<(SectionId, u64)>,
}

impl SectionBalancer {
    fn new(plan: &FloorPlan) -> Self {
        Self {
            sections: plan.sections().iter().map(|&s| (s, 0)).collect(),
        }
    }

    /// Greedy scan: least-loaded section first, first fitting table within
    /// it.  `weight` is the load added per successful seating.
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        weight:  impl Fn(&Party) -> u64,
    ) -> Vec<Pairing> {
        let mut used = FxHashSet::default();
        let mut pairings = Vec::new();

        for party in waiting {
            let mut chosen: Option<(usize, FreeTable)> = None;
            'sections: for (pos, &(section, _)) in self.sections.iter().enumerate() {
                for table in free {
                    if table.section == section
                        && table.capacity >= party.size
                        && !used.contains(&table.id)
                    {
                        chosen = Some((pos, *table));
                        break 'sections;
                    }
                }
            }

            if let Some((pos, table)) = chosen {
                used.insert(table.id);
                pairings.push(Pairing::single(table.id, party.id));

                // Re-insert behind every section with load ≤ the new load, so
                // the section just used drops to the back of its load class
                // and the list stays sorted.
                let (section, load) = self.sections.remove(pos);
                let new_load = load + weight(party);
                let insert_at = self.sections.partition_point(|&(_, l)| l <= new_load);
                self.sections.insert(insert_at, (section, new_load));
            }
        }

        pairings
    }
}

// ── RoundRobin ────────────────────────────────────────────────────────────────

/// Rotates seatings across sections, balancing by the number of parties each
/// section has received so far.  Stateful across calls; build a fresh one
/// per trial.
pub struct RoundRobin {
    balancer: SectionBalancer,
}

impl RoundRobin {
    pub fn new(plan: &FloorPlan) -> Self {
        Self {
            balancer: SectionBalancer::new(plan),
        }
    }
}

impl SeatingPolicy for RoundRobin {
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        _now:    SimTime,
        _rng:    &mut TrialRng,
    ) -> Vec<Pairing> {
        self.balancer.propose(waiting, free, |_| 1)
    }
}

// ── FewestPeople ──────────────────────────────────────────────────────────────

/// Like [`RoundRobin`], but balances by cumulative seated *headcount* per
/// section — a section that took one party of eight waits longer than one
/// that took two couples.
pub struct FewestPeople {
    balancer: SectionBalancer,
}

impl FewestPeople {
    pub fn new(plan: &FloorPlan) -> Self {
        Self {
            balancer: SectionBalancer::new(plan),
        }
    }
}

impl SeatingPolicy for FewestPeople {
    fn propose(
        &mut self,
        waiting: &[Party],
        free:    &[FreeTable],
        _now:    SimTime,
        _rng:    &mut TrialRng,
    ) -> Vec<Pairing> {
        self.balancer.propose(waiting, free, |p| p.size as u64)
    }
}
