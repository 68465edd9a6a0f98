//! The `OutputWriter` trait implemented by output backends.

use crate::{OutputResult, PartyRow, TrialSummaryRow};

/// Trait implemented by trial-output writers.
pub trait OutputWriter {
    /// Write a batch of per-party rows (typically one trial's worth).
    fn write_parties(&mut self, rows: &[PartyRow]) -> OutputResult<()>;

    /// Write one trial summary row.
    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
