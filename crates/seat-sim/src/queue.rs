//! `WaitQueue` — the arrival-ordered queue of not-yet-seated parties.

use seat_core::{Party, PartyId, SimTime};

/// Parties waiting to be seated, in arrival order.
///
/// The loop's discipline keeps one invariant: before any seating attempt at
/// a new time, [`purge_reneged`][Self::purge_reneged] has removed every
/// party whose patience deadline has passed — so a policy never sees a
/// party that has already given up.
#[derive(Default)]
pub struct WaitQueue {
    parties: Vec<Party>,
}

impl WaitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly arrived party.
    pub fn push(&mut self, party: Party) {
        self.parties.push(party);
    }

    /// Remove every party whose deadline is ≤ `now`, returning
    /// `(party, deadline)` pairs in arrival order.
    pub fn purge_reneged(&mut self, now: SimTime) -> Vec<(Party, SimTime)> {
        let mut gone = Vec::new();
        self.parties.retain(|p| match p.patience_until {
            Some(deadline) if deadline <= now => {
                gone.push((*p, deadline));
                false
            }
            _ => true,
        });
        gone
    }

    /// Remove the parties just seated.
    pub fn remove_seated(&mut self, seated: &[PartyId]) {
        if !seated.is_empty() {
            self.parties.retain(|p| !seated.contains(&p.id));
        }
    }

    /// Look up a waiting party by id.
    pub fn get(&self, id: PartyId) -> Option<Party> {
        self.parties.iter().find(|p| p.id == id).copied()
    }

    /// The queue in arrival order — the view handed to seating policies.
    pub fn as_slice(&self) -> &[Party] {
        &self.parties
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }
}
