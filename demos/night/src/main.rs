//! night — one simulated dinner service per seating policy.
//!
//! Runs a Monte Carlo sweep for each of the seven policies over the same
//! 16-table floor, prints an averaged comparison table, and writes the
//! combining policy's per-party logs as CSV.

mod floor;

use std::path::Path;

use anyhow::Result;

use seat_core::{SimConfig, SimTime};
use seat_floor::{Floor, FloorPlan};
use seat_output::{
    CsvWriter, MetricsSummary, OutputWriter, PartyRow, TrialMetrics, TrialSummaryRow,
};
use seat_policy::{
    FewestPeople, RoundRobin, SeatAnywhere, SeatingPolicy, SmallParties, SmallestAvailable,
    SmallestCombining, TightFit,
};
use seat_sim::{run_trials, ExpPatience, NormalService, PeakRate, SimBuilder, SizeMix, TrialLog};

use floor::build_floor;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64 = 42;
const TRIALS:             u32 = 200;
const HORIZON_SECS:       u64 = 8 * 3_600; // an 8-hour dinner service
const BASE_GAP_SECS:      f64 = 240.0;     // one party every 4 min at open
const PEAK_GAP_SECS:      f64 = 90.0;      // one every 90 s during the rush
const PEAK_START_SECS:    f64 = 3_600.0;
const RAMP_SECS:          f64 = 1_800.0;
const PEAK_END_SECS:      f64 = 3_600.0;
const PATIENCE_MEAN_SECS: f64 = 1_500.0;   // 25 min average patience

fn config() -> SimConfig {
    SimConfig {
        horizon_secs:  HORIZON_SECS,
        seed:          SEED,
        trials:        TRIALS,
        neighbor_only: true,
    }
}

fn arrivals() -> PeakRate {
    PeakRate::new(
        BASE_GAP_SECS,
        PEAK_GAP_SECS,
        PEAK_START_SECS,
        RAMP_SECS,
        PEAK_END_SECS,
        HORIZON_SECS as f64,
        SizeMix::evening_default(),
    )
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// Run one full Monte Carlo sweep with a fresh policy per trial.
fn sweep<P>(
    config:      &SimConfig,
    plan:        &FloorPlan,
    make_policy: impl Fn() -> P + Send + Sync,
) -> Result<(MetricsSummary, Vec<TrialLog>)>
where
    P: SeatingPolicy,
{
    let logs = run_trials(config.trials, |k| {
        SimBuilder::new(
            config.clone(),
            Floor::new(plan.clone(), config.neighbor_only),
            make_policy(),
            arrivals(),
            NormalService::evening_default(),
        )
        .patience(ExpPatience::new(PATIENCE_MEAN_SECS))
        .trial(k)
        .build()
    })?;

    let metrics: Vec<TrialMetrics> = logs.iter().map(TrialMetrics::from_log).collect();
    Ok((MetricsSummary::average(&metrics), logs))
}

fn print_row(name: &str, s: &MetricsSummary) {
    println!(
        "{name:<20} {:>8.1} {:>8.1} {:>9.1} {:>9.1} {:>10}",
        s.parties_seated,
        s.parties_dropped,
        s.people_seated,
        s.people_dropped,
        SimTime(s.mean_wait_secs.round() as u64).to_string(),
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = config();
    let plan = build_floor();

    println!("=== night — seating-policy comparison ===");
    println!(
        "Tables: {}  |  Trials: {}  |  Service: {}  |  Seed: {}",
        plan.len(),
        config.trials,
        SimTime(config.horizon_secs),
        config.seed
    );
    println!();
    println!(
        "{:<20} {:>8} {:>8} {:>9} {:>9} {:>10}",
        "Policy", "seated", "dropped", "people+", "people-", "mean wait"
    );
    println!("{}", "-".repeat(69));

    // 1. The single-table policies.
    let (s, _) = sweep(&config, &plan, SeatAnywhere::new)?;
    print_row("seat_anywhere", &s);

    let (s, _) = sweep(&config, &plan, TightFit::new)?;
    print_row("tight_fit", &s);

    let (s, _) = sweep(&config, &plan, SmallestAvailable::new)?;
    print_row("smallest_available", &s);

    let (s, _) = sweep(&config, &plan, SmallParties::new)?;
    print_row("small_parties", &s);

    // 2. The section-balancing policies (stateful, built from the plan).
    let (s, _) = sweep(&config, &plan, || RoundRobin::new(&plan))?;
    print_row("round_robin", &s);

    let (s, _) = sweep(&config, &plan, || FewestPeople::new(&plan))?;
    print_row("fewest_people", &s);

    // 3. The combining policy; keep its logs for CSV export.
    let (s, logs) = sweep(&config, &plan, || SmallestCombining::new(&plan))?;
    print_row("combining", &s);
    println!();

    // 4. Export the combining sweep.
    std::fs::create_dir_all("output/night")?;
    let mut writer = CsvWriter::new(Path::new("output/night"))?;
    for (k, log) in logs.iter().enumerate() {
        let trial = k as u32;
        writer.write_parties(&PartyRow::rows_from_log(trial, log))?;
        let metrics = TrialMetrics::from_log(log);
        writer.write_trial_summary(&TrialSummaryRow::from_metrics(trial, &metrics))?;
    }
    writer.finish()?;

    let parties: usize = logs.iter().map(|l| l.len()).sum();
    println!("Wrote output/night/party_log.csv ({parties} rows over {} trials)", logs.len());
    println!("Wrote output/night/trial_summaries.csv");

    Ok(())
}
