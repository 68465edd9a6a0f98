//! Top-level run configuration.

use crate::SimTime;

/// Configuration for one Monte Carlo sweep.
///
/// Typically built in the application crate from constants or a config file
/// and shared by every trial of the sweep.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Arrival horizon in simulated seconds: parties arriving at or after
    /// this moment are not generated.  Departures keep being processed until
    /// the floor empties.
    pub horizon_secs: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of independent trials in the sweep.
    pub trials: u32,

    /// When `true`, multi-table seatings must form a connected set under the
    /// floor plan's adjacency relation.  Fixed for the whole sweep.
    pub neighbor_only: bool,
}

impl SimConfig {
    /// The arrival horizon as a timestamp.
    #[inline]
    pub fn horizon(&self) -> SimTime {
        SimTime(self.horizon_secs)
    }
}
