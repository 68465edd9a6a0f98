//! The per-party output log of one trial.

use seat_core::{Party, PartyId, SimTime};

/// Everything recorded about one party over a trial.
///
/// Exactly one of the three outcomes holds at the end of a trial:
/// `seated` set (with `departed ≥ seated` once the party leaves), `reneged`
/// set, or neither — the party was still waiting when the trial finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartyRecord {
    pub size:    u32,
    pub arrived: SimTime,
    pub seated:   Option<SimTime>,
    pub departed: Option<SimTime>,
    pub reneged:  Option<SimTime>,
}

/// The output mapping `PartyId → PartyRecord` for one trial.
///
/// Party ids are assigned densely from 0 at arrival, so the log is a plain
/// `Vec` indexed by id.  Comparable with `==`, which is how the determinism
/// guarantee ("same samples, identical log") is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrialLog {
    records: Vec<PartyRecord>,
}

impl TrialLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new arrival.  The party's id must equal the current length
    /// (ids are dense and monotonic).
    pub fn record_arrival(&mut self, party: &Party) {
        debug_assert_eq!(party.id.index(), self.records.len());
        self.records.push(PartyRecord {
            size:     party.size,
            arrived:  party.arrived,
            seated:   None,
            departed: None,
            reneged:  None,
        });
    }

    /// Mark `party` seated at `at`.
    ///
    /// # Panics
    /// Panics if the id was never recorded.  Debug builds also assert the
    /// party has no prior terminal outcome.
    pub fn mark_seated(&mut self, party: PartyId, at: SimTime) {
        let rec = &mut self.records[party.index()];
        debug_assert!(rec.seated.is_none() && rec.reneged.is_none());
        rec.seated = Some(at);
    }

    /// Mark `party` departed at `at`.
    pub fn mark_departed(&mut self, party: PartyId, at: SimTime) {
        let rec = &mut self.records[party.index()];
        debug_assert!(rec.seated.is_some() && rec.departed.is_none());
        rec.departed = Some(at);
    }

    /// Mark `party` reneged at its deadline `at`.
    pub fn mark_reneged(&mut self, party: PartyId, at: SimTime) {
        let rec = &mut self.records[party.index()];
        debug_assert!(rec.seated.is_none() && rec.reneged.is_none());
        rec.reneged = Some(at);
    }

    pub fn get(&self, party: PartyId) -> Option<&PartyRecord> {
        self.records.get(party.index())
    }

    /// Iterate `(PartyId, &PartyRecord)` in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (PartyId, &PartyRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (PartyId(i as u32), r))
    }

    pub fn records(&self) -> &[PartyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
