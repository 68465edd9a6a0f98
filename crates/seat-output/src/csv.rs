//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `party_log.csv`
//! - `trial_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PartyRow, TrialSummaryRow};

/// Writes trial output to two CSV files.
pub struct CsvWriter {
    parties:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

fn opt_field(v: Option<u64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut parties = Writer::from_path(dir.join("party_log.csv"))?;
        parties.write_record([
            "trial",
            "party_id",
            "size",
            "arrived_secs",
            "seated_secs",
            "departed_secs",
            "reneged_secs",
        ])?;

        let mut summaries = Writer::from_path(dir.join("trial_summaries.csv"))?;
        summaries.write_record([
            "trial",
            "parties_seated",
            "people_seated",
            "parties_dropped",
            "people_dropped",
            "mean_wait_secs",
        ])?;

        Ok(Self {
            parties,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_parties(&mut self, rows: &[PartyRow]) -> OutputResult<()> {
        for row in rows {
            self.parties.write_record(&[
                row.trial.to_string(),
                row.party_id.to_string(),
                row.size.to_string(),
                row.arrived_secs.to_string(),
                opt_field(row.seated_secs),
                opt_field(row.departed_secs),
                opt_field(row.reneged_secs),
            ])?;
        }
        Ok(())
    }

    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.trial.to_string(),
            row.parties_seated.to_string(),
            row.people_seated.to_string(),
            row.parties_dropped.to_string(),
            row.people_dropped.to_string(),
            format!("{:.1}", row.mean_wait_secs),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.parties.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
