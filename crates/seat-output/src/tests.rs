//! Unit tests for seat-output.

use seat_core::{Party, PartyId, SimTime};
use seat_sim::TrialLog;

use crate::{CsvWriter, MetricsSummary, OutputWriter, PartyRow, TrialMetrics, TrialSummaryRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn arrive(log: &mut TrialLog, id: u32, size: u32, at: u64) {
    log.record_arrival(&Party {
        id:             PartyId(id),
        size,
        arrived:        SimTime(at),
        service_secs:   600,
        patience_until: None,
    });
}

/// Four parties: seated instantly / seated after a wait / reneged / abandoned.
fn sample_log() -> TrialLog {
    let mut log = TrialLog::new();
    arrive(&mut log, 0, 2, 100);
    log.mark_seated(PartyId(0), SimTime(100));
    log.mark_departed(PartyId(0), SimTime(700));

    arrive(&mut log, 1, 4, 200);
    log.mark_seated(PartyId(1), SimTime(500));
    log.mark_departed(PartyId(1), SimTime(1_100));

    arrive(&mut log, 2, 3, 300);
    log.mark_reneged(PartyId(2), SimTime(900));

    arrive(&mut log, 3, 6, 400); // abandoned: no terminal mark
    log
}

// ── Metrics ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use super::*;

    #[test]
    fn from_log_splits_outcomes() {
        let m = TrialMetrics::from_log(&sample_log());
        assert_eq!(m.parties_seated, 2);
        assert_eq!(m.people_seated, 6);
        assert_eq!(m.parties_dropped, 2); // the reneger and the abandoned
        assert_eq!(m.people_dropped, 9);
        assert_eq!(m.parties_without_wait, 1);
        assert_eq!(m.parties_with_wait, 1);
        assert_eq!(m.mean_wait_secs, 300.0);
    }

    #[test]
    fn empty_log_is_all_zero() {
        let m = TrialMetrics::from_log(&TrialLog::new());
        assert_eq!(m, TrialMetrics::default());
    }

    #[test]
    fn average_over_trials() {
        let a = TrialMetrics {
            parties_seated: 10,
            mean_wait_secs: 100.0,
            ..TrialMetrics::default()
        };
        let b = TrialMetrics {
            parties_seated: 20,
            mean_wait_secs: 300.0,
            ..TrialMetrics::default()
        };
        let s = MetricsSummary::average(&[a, b]);
        assert_eq!(s.trials, 2);
        assert_eq!(s.parties_seated, 15.0);
        assert_eq!(s.mean_wait_secs, 200.0);
    }

    #[test]
    fn average_of_nothing_is_default() {
        assert_eq!(MetricsSummary::average(&[]), MetricsSummary::default());
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use super::*;

    #[test]
    fn rows_from_log_preserves_order_and_options() {
        let rows = PartyRow::rows_from_log(7, &sample_log());
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.trial == 7));

        assert_eq!(rows[0].seated_secs, Some(100));
        assert_eq!(rows[1].seated_secs, Some(500));
        assert_eq!(rows[2].reneged_secs, Some(900));
        assert_eq!(rows[3].seated_secs, None);
        assert_eq!(rows[3].reneged_secs, None);
    }
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_writer {
    use super::*;

    #[test]
    fn writes_both_files_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        let log = sample_log();
        writer.write_parties(&PartyRow::rows_from_log(0, &log)).unwrap();
        let metrics = TrialMetrics::from_log(&log);
        writer
            .write_trial_summary(&TrialSummaryRow::from_metrics(0, &metrics))
            .unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap(); // idempotent

        let parties = std::fs::read_to_string(dir.path().join("party_log.csv")).unwrap();
        let mut lines = parties.lines();
        assert_eq!(
            lines.next().unwrap(),
            "trial,party_id,size,arrived_secs,seated_secs,departed_secs,reneged_secs"
        );
        assert_eq!(lines.next().unwrap(), "0,0,2,100,100,700,");
        // The abandoned party has three empty outcome fields.
        assert_eq!(lines.nth(2).unwrap(), "0,3,6,400,,,");

        let summaries =
            std::fs::read_to_string(dir.path().join("trial_summaries.csv")).unwrap();
        let mut lines = summaries.lines();
        assert_eq!(
            lines.next().unwrap(),
            "trial,parties_seated,people_seated,parties_dropped,people_dropped,mean_wait_secs"
        );
        assert_eq!(lines.next().unwrap(), "0,2,6,2,9,300.0");
    }
}
