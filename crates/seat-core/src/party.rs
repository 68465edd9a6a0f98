//! The `Party` record — one group requesting seating.

use crate::{PartyId, SimTime};

/// A group of guests waiting to be seated.
///
/// Created once at arrival and immutable thereafter; all fields fit in a
/// couple of words, so parties are passed around by value.  A party ends a
/// trial in exactly one of three ways: seated (and later departed), reneged
/// (gave up waiting at `patience_until`), or abandoned standing in the queue
/// when the trial finishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    pub id: PartyId,

    /// Number of guests; always ≥ 1.
    pub size: u32,

    /// When the party walked in.
    pub arrived: SimTime,

    /// How long the party will occupy its table(s) once seated, in seconds.
    /// Sampled once at arrival.
    pub service_secs: u64,

    /// Absolute deadline after which the party leaves the queue unseated.
    /// `None` means the party waits forever.
    pub patience_until: Option<SimTime>,
}

impl Party {
    /// The departure timestamp for a seating that starts at `seated`.
    #[inline]
    pub fn departs_at(&self, seated: SimTime) -> SimTime {
        seated.offset(self.service_secs)
    }

    /// `true` if the party's patience has run out at (or before) `now`.
    #[inline]
    pub fn gives_up_by(&self, now: SimTime) -> bool {
        match self.patience_until {
            Some(deadline) => deadline <= now,
            None => false,
        }
    }
}
