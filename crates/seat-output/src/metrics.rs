//! The stateless reducers from trial logs to aggregate numbers.
//!
//! "Dropped" counts every party that was never seated — reneged *or* still
//! standing in the queue when the trial finished.  Wait time is measured
//! only over seated parties; instant seatings count separately so the mean
//! reflects the parties that actually stood around.

use seat_sim::TrialLog;

// ── TrialMetrics ──────────────────────────────────────────────────────────────

/// Aggregate outcome of a single trial.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrialMetrics {
    pub parties_seated:       u64,
    pub people_seated:        u64,
    pub parties_dropped:      u64,
    pub people_dropped:       u64,
    pub parties_with_wait:    u64,
    pub parties_without_wait: u64,
    /// Mean wait over `parties_with_wait`; 0 when nobody waited.
    pub mean_wait_secs:       f64,
}

impl TrialMetrics {
    /// Reduce one trial log.
    pub fn from_log(log: &TrialLog) -> Self {
        let mut m = TrialMetrics::default();
        let mut wait_sum_secs = 0u64;

        for (_, rec) in log.iter() {
            match rec.seated {
                None => {
                    m.parties_dropped += 1;
                    m.people_dropped += rec.size as u64;
                }
                Some(seated) => {
                    m.parties_seated += 1;
                    m.people_seated += rec.size as u64;

                    let wait = seated.since(rec.arrived);
                    if wait == 0 {
                        m.parties_without_wait += 1;
                    } else {
                        m.parties_with_wait += 1;
                        wait_sum_secs += wait;
                    }
                }
            }
        }

        if m.parties_with_wait > 0 {
            m.mean_wait_secs = wait_sum_secs as f64 / m.parties_with_wait as f64;
        }
        m
    }
}

// ── MetricsSummary ────────────────────────────────────────────────────────────

/// Per-trial metrics averaged over a Monte Carlo sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricsSummary {
    pub trials:               u32,
    pub parties_seated:       f64,
    pub people_seated:        f64,
    pub parties_dropped:      f64,
    pub people_dropped:       f64,
    pub parties_with_wait:    f64,
    pub parties_without_wait: f64,
    pub mean_wait_secs:       f64,
}

impl MetricsSummary {
    /// Average the per-trial metrics; all-zero for an empty slice.
    pub fn average(trials: &[TrialMetrics]) -> Self {
        let n = trials.len() as f64;
        if trials.is_empty() {
            return Self::default();
        }

        let mut s = MetricsSummary {
            trials: trials.len() as u32,
            ..Self::default()
        };
        for m in trials {
            s.parties_seated += m.parties_seated as f64;
            s.people_seated += m.people_seated as f64;
            s.parties_dropped += m.parties_dropped as f64;
            s.people_dropped += m.people_dropped as f64;
            s.parties_with_wait += m.parties_with_wait as f64;
            s.parties_without_wait += m.parties_without_wait as f64;
            s.mean_wait_secs += m.mean_wait_secs;
        }
        s.parties_seated /= n;
        s.people_seated /= n;
        s.parties_dropped /= n;
        s.people_dropped /= n;
        s.parties_with_wait /= n;
        s.parties_without_wait /= n;
        s.mean_wait_secs /= n;
        s
    }
}
