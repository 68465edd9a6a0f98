//! `DepartureSchedule` — the time-ordered queue of pending departures.
//!
//! # Ordering discipline
//!
//! Entries are ordered by `(departure time, insertion sequence)`: earliest
//! time first, and among entries sharing a time, oldest insertion first.
//! The explicit sequence number makes tie-breaking deterministic and stable —
//! two runs that push the same entries in the same order pop them in the
//! same order, regardless of heap internals.
//!
//! A party seated across several tables contributes one entry per table, all
//! pushed in one call chain and therefore consecutive in the order above.
//! [`Floor::pop_departure`][crate::Floor::pop_departure] relies on this to
//! drain a whole party with consecutive pops.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use seat_core::{Party, PartyId, SimTime, TableId};

// ── Entry ─────────────────────────────────────────────────────────────────────

/// One pending departure: `party` frees `table` at time `at`.
#[derive(Clone, Debug)]
struct Entry {
    at:    SimTime,
    seq:   u64,
    table: TableId,
    party: Party,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    /// Order by departure time, then by insertion sequence.  `seq` is unique,
    /// so the order is total and the table/party payloads never participate.
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at).then(self.seq.cmp(&other.seq))
    }
}

// ── DepartureSchedule ─────────────────────────────────────────────────────────

/// A min-priority queue of pending departures.
///
/// Invariants maintained by [`Floor`][crate::Floor]:
/// - exactly one entry per occupied table;
/// - all entries of one party share the same departure time.
#[derive(Default)]
pub struct DepartureSchedule {
    heap:     BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl DepartureSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `party` to free `table` at time `at`.
    pub fn push(&mut self, at: SimTime, table: TableId, party: Party) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { at, seq, table, party }));
    }

    /// The earliest pending departure time, or [`SimTime::FAR_FUTURE`] when
    /// the schedule is empty.  Does not remove the entry.
    pub fn next_time(&self) -> SimTime {
        match self.heap.peek() {
            Some(Reverse(e)) => e.at,
            None => SimTime::FAR_FUTURE,
        }
    }

    /// The party owning the earliest pending entry, if any.
    pub fn peek_party(&self) -> Option<PartyId> {
        self.heap.peek().map(|Reverse(e)| e.party.id)
    }

    /// Remove and return the earliest entry as `(time, table, party)`.
    pub fn pop(&mut self) -> Option<(SimTime, TableId, Party)> {
        self.heap.pop().map(|Reverse(e)| (e.at, e.table, e.party))
    }

    /// Number of pending entries (one per occupied table).
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
