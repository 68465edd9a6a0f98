//! Plain data row types written by output backends.

use seat_core::PartyId;
use seat_sim::{PartyRecord, TrialLog};

use crate::metrics::TrialMetrics;

/// One party's outcome within one trial.
///
/// Times are absolute simulated seconds; unset outcomes stay `None` and are
/// written as empty CSV fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyRow {
    pub trial:         u32,
    pub party_id:      u32,
    pub size:          u32,
    pub arrived_secs:  u64,
    pub seated_secs:   Option<u64>,
    pub departed_secs: Option<u64>,
    pub reneged_secs:  Option<u64>,
}

impl PartyRow {
    pub fn from_record(trial: u32, party: PartyId, rec: &PartyRecord) -> Self {
        Self {
            trial,
            party_id:      party.0,
            size:          rec.size,
            arrived_secs:  rec.arrived.0,
            seated_secs:   rec.seated.map(|t| t.0),
            departed_secs: rec.departed.map(|t| t.0),
            reneged_secs:  rec.reneged.map(|t| t.0),
        }
    }

    /// Flatten a whole trial log into rows, in party-id order.
    pub fn rows_from_log(trial: u32, log: &TrialLog) -> Vec<PartyRow> {
        log.iter()
            .map(|(id, rec)| PartyRow::from_record(trial, id, rec))
            .collect()
    }
}

/// Aggregate outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummaryRow {
    pub trial:           u32,
    pub parties_seated:  u64,
    pub people_seated:   u64,
    pub parties_dropped: u64,
    pub people_dropped:  u64,
    pub mean_wait_secs:  f64,
}

impl TrialSummaryRow {
    pub fn from_metrics(trial: u32, m: &TrialMetrics) -> Self {
        Self {
            trial,
            parties_seated:  m.parties_seated,
            people_seated:   m.people_seated,
            parties_dropped: m.parties_dropped,
            people_dropped:  m.people_dropped,
            mean_wait_secs:  m.mean_wait_secs,
        }
    }
}
