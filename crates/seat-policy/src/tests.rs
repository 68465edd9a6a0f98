//! Unit tests for seat-policy.

use seat_core::{Party, PartyId, SectionId, SimTime, TableId, TrialRng};
use seat_floor::{FloorPlan, FloorPlanBuilder, FreeTable};

use crate::{
    FewestPeople, Pairing, RoundRobin, SeatAnywhere, SeatingPolicy, SmallParties,
    SmallestAvailable, SmallestCombining, TightFit,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn party(id: u32, size: u32) -> Party {
    Party {
        id:             PartyId(id),
        size,
        arrived:        SimTime::ZERO,
        service_secs:   1_800,
        patience_until: None,
    }
}

fn table(id: u32, capacity: u32, section: u16) -> FreeTable {
    FreeTable {
        id:       TableId(id),
        capacity,
        section:  SectionId(section),
    }
}

fn rng() -> TrialRng {
    TrialRng::from_seed(99)
}

fn propose(
    policy:  &mut impl SeatingPolicy,
    waiting: &[Party],
    free:    &[FreeTable],
) -> Vec<Pairing> {
    policy.propose(waiting, free, SimTime::ZERO, &mut rng())
}

/// Tables of the given capacities in one section, no adjacency.
fn plain_tables(capacities: &[u32]) -> Vec<FreeTable> {
    capacities
        .iter()
        .enumerate()
        .map(|(i, &c)| table(i as u32, c, 0))
        .collect()
}

// ── SeatAnywhere ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod seat_anywhere {
    use super::*;

    #[test]
    fn first_fitting_table_in_snapshot_order() {
        let free = plain_tables(&[2, 6, 4]);
        let got = propose(&mut SeatAnywhere::new(), &[party(0, 3)], &free);
        assert_eq!(got, vec![Pairing::single(TableId(1), PartyId(0))]);
    }

    #[test]
    fn table_is_not_reused_within_one_batch() {
        let free = plain_tables(&[4, 4]);
        let waiting = [party(0, 4), party(1, 4), party(2, 4)];
        let got = propose(&mut SeatAnywhere::new(), &waiting, &free);
        assert_eq!(got.len(), 2);
        assert_ne!(got[0].tables, got[1].tables);
        // Earliest arrivals claim first.
        assert_eq!(got[0].party, PartyId(0));
        assert_eq!(got[1].party, PartyId(1));
    }

    #[test]
    fn too_large_party_is_skipped_not_blocking() {
        let free = plain_tables(&[4]);
        let waiting = [party(0, 9), party(1, 2)];
        let got = propose(&mut SeatAnywhere::new(), &waiting, &free);
        assert_eq!(got, vec![Pairing::single(TableId(0), PartyId(1))]);
    }

    #[test]
    fn shuffled_variant_is_deterministic_per_seed() {
        let free = plain_tables(&[2, 2, 2, 2, 2, 2, 2, 2]);
        let waiting = [party(0, 2)];

        let mut a = TrialRng::from_seed(5);
        let mut b = TrialRng::from_seed(5);
        let got_a = SeatAnywhere::shuffled().propose(&waiting, &free, SimTime::ZERO, &mut a);
        let got_b = SeatAnywhere::shuffled().propose(&waiting, &free, SimTime::ZERO, &mut b);
        assert_eq!(got_a, got_b);
    }
}

// ── TightFit ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tight_fit {
    use super::*;

    #[test]
    fn picks_the_within_one_seat_table() {
        let free = plain_tables(&[2, 4, 8]);
        let got = propose(&mut TightFit::new(), &[party(0, 2)], &free);
        assert_eq!(got, vec![Pairing::single(TableId(0), PartyId(0))]);
    }

    #[test]
    fn big_party_goes_through_the_overflow_valve() {
        let free = plain_tables(&[2, 4, 8]);
        // The 4-top must never match a party of 7; only the 8 does.
        let got = propose(&mut TightFit::new(), &[party(0, 7)], &free);
        assert_eq!(got, vec![Pairing::single(TableId(2), PartyId(0))]);
    }

    #[test]
    fn loose_table_below_threshold_never_matches() {
        let free = plain_tables(&[4]);
        let got = propose(&mut TightFit::new(), &[party(0, 2)], &free);
        assert!(got.is_empty());
    }
}

// ── SmallestAvailable ─────────────────────────────────────────────────────────

#[cfg(test)]
mod smallest_available {
    use super::*;

    #[test]
    fn smallest_fitting_table_wins() {
        // Snapshot order deliberately descending; the policy must re-sort.
        let free = plain_tables(&[6, 4, 2]);
        let got = propose(&mut SmallestAvailable::new(), &[party(0, 3)], &free);
        assert_eq!(got, vec![Pairing::single(TableId(1), PartyId(0))]);
    }

    #[test]
    fn equal_capacities_break_ties_by_id() {
        let free = vec![table(3, 4, 0), table(1, 4, 0)];
        let got = propose(&mut SmallestAvailable::new(), &[party(0, 4)], &free);
        assert_eq!(got, vec![Pairing::single(TableId(1), PartyId(0))]);
    }
}

// ── SmallParties ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod small_parties {
    use super::*;

    #[test]
    fn refuses_parties_above_the_cutoff() {
        let free = plain_tables(&[8, 8]);
        let waiting = [party(0, 6), party(1, 5)];
        let got = propose(&mut SmallParties::new(), &waiting, &free);
        assert_eq!(got, vec![Pairing::single(TableId(0), PartyId(1))]);
    }
}

// ── RoundRobin / FewestPeople ─────────────────────────────────────────────────

#[cfg(test)]
mod rotation {
    use super::*;

    /// Two sections, two 4-tops each.
    fn two_section_plan() -> FloorPlan {
        let mut b = FloorPlanBuilder::new();
        b.add_table(4, SectionId(0));
        b.add_table(4, SectionId(0));
        b.add_table(4, SectionId(1));
        b.add_table(4, SectionId(1));
        b.build()
    }

    fn sections_of(pairings: &[Pairing], free: &[FreeTable]) -> Vec<SectionId> {
        pairings
            .iter()
            .map(|p| {
                free.iter()
                    .find(|t| t.id == p.tables[0])
                    .map(|t| t.section)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn consecutive_seatings_alternate_sections() {
        let plan = two_section_plan();
        let free: Vec<FreeTable> = vec![
            table(0, 4, 0),
            table(1, 4, 0),
            table(2, 4, 1),
            table(3, 4, 1),
        ];
        let waiting = [party(0, 2), party(1, 2), party(2, 2), party(3, 2)];
        let got = propose(&mut RoundRobin::new(&plan), &waiting, &free);
        assert_eq!(
            sections_of(&got, &free),
            vec![SectionId(0), SectionId(1), SectionId(0), SectionId(1)]
        );
    }

    #[test]
    fn rotation_state_carries_across_calls() {
        let plan = two_section_plan();
        let mut policy = RoundRobin::new(&plan);
        let free: Vec<FreeTable> = vec![table(0, 4, 0), table(1, 4, 0), table(2, 4, 1)];

        let first = propose(&mut policy, &[party(0, 2)], &free);
        assert_eq!(sections_of(&first, &free), vec![SectionId(0)]);

        // Section 0 now carries load 1, so the next call starts at section 1.
        let second = propose(&mut policy, &[party(1, 2)], &free);
        assert_eq!(sections_of(&second, &free), vec![SectionId(1)]);
    }

    #[test]
    fn fewest_people_balances_by_headcount() {
        let plan = two_section_plan();
        let free: Vec<FreeTable> = vec![
            table(0, 4, 0),
            table(1, 4, 0),
            table(2, 4, 1),
            table(3, 4, 1),
        ];
        // A four-top in section 0, then two couples: both couples should go
        // to section 1 (headcounts 4 vs 0, then 4 vs 2).
        let waiting = [party(0, 4), party(1, 2), party(2, 2)];
        let got = propose(&mut FewestPeople::new(&plan), &waiting, &free);
        assert_eq!(
            sections_of(&got, &free),
            vec![SectionId(0), SectionId(1), SectionId(1)]
        );
    }
}

// ── SmallestCombining ─────────────────────────────────────────────────────────

#[cfg(test)]
mod combining {
    use super::*;

    /// 0(4) — 1(4) — 2(8), one section each, chain adjacency.
    fn chain_plan() -> FloorPlan {
        let mut b = FloorPlanBuilder::new();
        let t0 = b.add_table(4, SectionId(0));
        let t1 = b.add_table(4, SectionId(1));
        let t2 = b.add_table(8, SectionId(2));
        b.add_adjacency(t0, t1);
        b.add_adjacency(t1, t2);
        b.build()
    }

    fn free_of(plan: &FloorPlan, ids: &[u32]) -> Vec<FreeTable> {
        ids.iter()
            .map(|&i| {
                let t = plan.table(TableId(i));
                FreeTable {
                    id:       TableId(i),
                    capacity: t.capacity,
                    section:  t.section,
                }
            })
            .collect()
    }

    #[test]
    fn single_table_pass_prefers_smallest_fit() {
        let plan = chain_plan();
        let free = free_of(&plan, &[0, 1, 2]);
        let got = propose(&mut SmallestCombining::new(&plan), &[party(0, 3)], &free);
        assert_eq!(got, vec![Pairing::single(TableId(0), PartyId(0))]);
    }

    #[test]
    fn combines_two_neighbors_when_no_single_table_fits() {
        let plan = chain_plan();
        // Only 0 and 1 free; a party of 7 fits nowhere singly but 0+1 = 8.
        let free = free_of(&plan, &[0, 1]);
        let got = propose(&mut SmallestCombining::new(&plan), &[party(0, 7)], &free);
        assert_eq!(got.len(), 1);
        let mut tables = got[0].tables.clone();
        tables.sort_unstable();
        assert_eq!(tables, vec![TableId(0), TableId(1)]);
    }

    #[test]
    fn three_table_pass_spans_the_whole_chain() {
        let plan = chain_plan();
        let free = free_of(&plan, &[0, 1, 2]);
        // 14 guests: no single (max 8), no pair (best 8+4 = 12), but
        // 1 + 0 + 2 = 16 works around anchor 1.
        let got = propose(&mut SmallestCombining::new(&plan), &[party(0, 14)], &free);
        assert_eq!(got.len(), 1);
        let mut tables = got[0].tables.clone();
        tables.sort_unstable();
        assert_eq!(tables, vec![TableId(0), TableId(1), TableId(2)]);
    }

    #[test]
    fn miss_does_not_block_later_parties_by_default() {
        let plan = chain_plan();
        let free = free_of(&plan, &[0, 1]);
        let waiting = [party(0, 20), party(1, 2)];
        let got = propose(&mut SmallestCombining::new(&plan), &waiting, &free);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].party, PartyId(1));
    }

    #[test]
    fn halt_on_miss_stops_the_batch() {
        let plan = chain_plan();
        let free = free_of(&plan, &[0, 1]);
        let waiting = [party(0, 20), party(1, 2)];
        let got = propose(
            &mut SmallestCombining::new(&plan).halt_on_miss(true),
            &waiting,
            &free,
        );
        assert!(got.is_empty());
    }

    /// 0(4) — 1(4), 0 — 2(6): anchor choice shows whether table 2 is held.
    fn hold_plan() -> FloorPlan {
        let mut b = FloorPlanBuilder::new();
        let t0 = b.add_table(4, SectionId(0));
        let t1 = b.add_table(4, SectionId(0));
        let t2 = b.add_table(6, SectionId(0));
        b.add_adjacency(t0, t1);
        b.add_adjacency(t0, t2);
        b.build()
    }

    #[test]
    fn held_anchor_is_skipped_for_other_parties() {
        let plan = hold_plan();
        let free = free_of(&plan, &[0, 1, 2]);
        let mut policy = SmallestCombining::new(&plan);

        // Party 0 (size 15) cannot be seated at all (4+4+6 = 14) and takes a
        // hold on table 2, the largest free table.
        // Party 1 (size 10) then combines — but anchor 2 is held for party
        // 0, so the winning anchor is table 0 (0+2 = 10), not table 2.
        let waiting = [party(0, 15), party(1, 10)];
        let got = propose(&mut policy, &waiting, &free);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].party, PartyId(1));
        assert_eq!(got[0].tables, vec![TableId(0), TableId(2)]);
    }

    #[test]
    fn hold_is_released_when_the_party_leaves_the_queue() {
        let plan = hold_plan();
        let free = free_of(&plan, &[0, 1, 2]);
        let mut policy = SmallestCombining::new(&plan);

        // First call: party 0 places a hold on table 2 (as above).
        propose(&mut policy, &[party(0, 15)], &free);

        // Party 0 has left the queue (reneged); its hold must be gone, so
        // party 1's combination now anchors at table 2 (2+0 = 10).
        let got = propose(&mut policy, &[party(1, 10)], &free);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].tables, vec![TableId(2), TableId(0)]);
    }
}
