//! `seat-output` — trial log export and metric reduction.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`row`]     | `PartyRow`, `TrialSummaryRow` — plain output rows          |
//! | [`metrics`] | `TrialMetrics`, `MetricsSummary` — the stateless reducers  |
//! | [`writer`]  | `OutputWriter` trait                                       |
//! | [`csv`]     | `CsvWriter` — `party_log.csv` + `trial_summaries.csv`      |
//! | [`error`]   | `OutputError`, `OutputResult<T>`                           |
//!
//! # Usage
//!
//! ```rust,ignore
//! use seat_output::{CsvWriter, OutputWriter, PartyRow, TrialMetrics, TrialSummaryRow};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! for (k, log) in logs.iter().enumerate() {
//!     let trial = k as u32;
//!     writer.write_parties(&PartyRow::rows_from_log(trial, log))?;
//!     let metrics = TrialMetrics::from_log(log);
//!     writer.write_trial_summary(&TrialSummaryRow::from_metrics(trial, &metrics))?;
//! }
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod metrics;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use metrics::{MetricsSummary, TrialMetrics};
pub use row::{PartyRow, TrialSummaryRow};
pub use writer::OutputWriter;
