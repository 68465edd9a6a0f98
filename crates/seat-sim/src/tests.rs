//! Integration tests for seat-sim.

use seat_core::{Party, PartyId, SectionId, SimConfig, SimTime, TableId, TrialRng};
use seat_floor::{Floor, FloorPlan, FloorPlanBuilder, FreeTable};
use seat_policy::{Pairing, SeatAnywhere, SeatingPolicy, SmallestAvailable};

use crate::sampling::{ConstantRate, ExpPatience, NormalService, SizeMix};
use crate::{run_trials, Arrival, NoopObserver, SimBuilder, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(horizon_secs: u64) -> SimConfig {
    SimConfig {
        horizon_secs,
        seed: 42,
        trials: 1,
        neighbor_only: false,
    }
}

/// A single table of the given capacity.
fn one_table_plan(capacity: u32) -> FloorPlan {
    let mut b = FloorPlanBuilder::new();
    b.add_table(capacity, SectionId(0));
    b.build()
}

/// Replay a fixed arrival list, then report "no more arrivals".
fn scripted(arrivals: Vec<Arrival>) -> impl FnMut(SimTime, &mut TrialRng) -> Arrival {
    let mut stream = arrivals.into_iter();
    move |_now, _rng| {
        stream.next().unwrap_or(Arrival {
            size: 1,
            at:   SimTime::FAR_FUTURE,
        })
    }
}

fn fixed_service(secs: u64) -> impl FnMut(u32, &mut TrialRng) -> u64 {
    move |_size, _rng| secs
}

/// A realistic randomized sim for the statistical tests.
fn random_sim(
    trial: u32,
) -> crate::Sim<
    SmallestAvailable,
    ConstantRate,
    NormalService,
    ExpPatience,
> {
    let mut b = FloorPlanBuilder::new();
    for capacity in [2, 2, 4, 4, 6, 8] {
        b.add_table(capacity, SectionId(0));
    }
    let floor = Floor::new(b.build(), false);

    SimBuilder::new(
        config(4 * 3_600),
        floor,
        SmallestAvailable::new(),
        ConstantRate::new(180.0, SizeMix::evening_default()),
        NormalService::evening_default(),
    )
    .patience(ExpPatience::new(1_200.0))
    .trial(trial)
    .build()
}

// ── Event ordering ────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_loop {
    use super::*;

    #[test]
    fn seats_departs_and_abandons_in_order() {
        let floor = Floor::new(one_table_plan(4), false);
        let arrivals = scripted(vec![
            Arrival { size: 2, at: SimTime(60) },
            Arrival { size: 2, at: SimTime(120) },
            Arrival { size: 4, at: SimTime(700) },
        ]);

        let log = SimBuilder::new(config(2_000), floor, SeatAnywhere::new(), arrivals, fixed_service(600))
            .build()
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(log.len(), 3);

        // Party 0: seated on arrival, departs after its 600 s of service.
        let p0 = log.get(PartyId(0)).unwrap();
        assert_eq!(p0.seated, Some(SimTime(60)));
        assert_eq!(p0.departed, Some(SimTime(660)));
        assert_eq!(p0.reneged, None);

        // Party 1: waits for party 0's table, seated the moment it frees.
        let p1 = log.get(PartyId(1)).unwrap();
        assert_eq!(p1.arrived, SimTime(120));
        assert_eq!(p1.seated, Some(SimTime(660)));
        assert_eq!(p1.departed, Some(SimTime(1_260)));

        // Party 2: arrives while the table is taken and the door closes
        // before it frees — abandoned with no terminal mark.
        let p2 = log.get(PartyId(2)).unwrap();
        assert_eq!(p2.arrived, SimTime(700));
        assert_eq!(p2.seated, None);
        assert_eq!(p2.reneged, None);
        assert_eq!(p2.departed, None);
    }

    #[test]
    fn arrival_wins_a_tie_then_the_departure_reseats() {
        let floor = Floor::new(one_table_plan(2), false);
        let arrivals = scripted(vec![
            Arrival { size: 2, at: SimTime(100) },
            // Lands exactly when party 0's departure is scheduled.
            Arrival { size: 2, at: SimTime(200) },
            Arrival { size: 1, at: SimTime(250) },
        ]);

        let log = SimBuilder::new(config(2_000), floor, SeatAnywhere::new(), arrivals, fixed_service(100))
            .build()
            .run(&mut NoopObserver)
            .unwrap();

        // The arrival is processed first, finds the table still occupied,
        // and is seated when the simultaneous departure fires next.
        let p1 = log.get(PartyId(1)).unwrap();
        assert_eq!(p1.seated, Some(SimTime(200)));
    }

    #[test]
    fn renege_beats_a_table_freed_later() {
        let floor = Floor::new(one_table_plan(2), false);
        let arrivals = scripted(vec![
            Arrival { size: 2, at: SimTime(10) },
            Arrival { size: 2, at: SimTime(20) },
            Arrival { size: 1, at: SimTime(400) },
        ]);
        // Only the second party is impatient: 80 s, deadline 100.
        let mut arrivals_seen = 0;
        let patience = move |now: SimTime, _rng: &mut TrialRng| {
            arrivals_seen += 1;
            (arrivals_seen == 2).then(|| now.offset(80))
        };

        let log = SimBuilder::new(config(2_000), floor, SeatAnywhere::new(), arrivals, fixed_service(300))
            .patience(patience)
            .build()
            .run(&mut NoopObserver)
            .unwrap();

        // The table frees at 310, after the deadline: the party must be
        // gone (recorded at its deadline), not seated.
        let p1 = log.get(PartyId(1)).unwrap();
        assert_eq!(p1.reneged, Some(SimTime(100)));
        assert_eq!(p1.seated, None);

        // The purge happened before the 310 seating attempt, so the late
        // third party gets the freed table instead.
        let p2 = log.get(PartyId(2)).unwrap();
        assert_eq!(p2.seated, Some(SimTime(400)));
    }
}

// ── Policy contract enforcement ───────────────────────────────────────────────

#[cfg(test)]
mod contract {
    use super::*;

    struct ProposesUnknownParty;

    impl SeatingPolicy for ProposesUnknownParty {
        fn propose(
            &mut self,
            _waiting: &[Party],
            _free:    &[FreeTable],
            _now:     SimTime,
            _rng:     &mut TrialRng,
        ) -> Vec<Pairing> {
            vec![Pairing::single(TableId(0), PartyId(999))]
        }
    }

    struct ProposesTwice;

    impl SeatingPolicy for ProposesTwice {
        fn propose(
            &mut self,
            waiting: &[Party],
            free:    &[FreeTable],
            _now:    SimTime,
            _rng:    &mut TrialRng,
        ) -> Vec<Pairing> {
            match (waiting.first(), free) {
                (Some(p), [a, b, ..]) => vec![
                    Pairing::single(a.id, p.id),
                    Pairing::single(b.id, p.id),
                ],
                _ => vec![],
            }
        }
    }

    #[test]
    fn unknown_party_aborts_the_trial() {
        let floor = Floor::new(one_table_plan(4), false);
        let arrivals = scripted(vec![Arrival { size: 2, at: SimTime(10) }]);
        let result = SimBuilder::new(config(100), floor, ProposesUnknownParty, arrivals, fixed_service(60))
            .build()
            .run(&mut NoopObserver);
        assert!(matches!(result, Err(SimError::UnknownParty(PartyId(999)))));
    }

    #[test]
    fn duplicate_party_aborts_the_trial() {
        let mut b = FloorPlanBuilder::new();
        b.add_table(4, SectionId(0));
        b.add_table(4, SectionId(0));
        let floor = Floor::new(b.build(), false);

        let arrivals = scripted(vec![Arrival { size: 2, at: SimTime(10) }]);
        let result = SimBuilder::new(config(100), floor, ProposesTwice, arrivals, fixed_service(60))
            .build()
            .run(&mut NoopObserver);
        assert!(matches!(result, Err(SimError::DuplicateParty(PartyId(0)))));
    }
}

// ── Statistical / whole-trial properties ──────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn every_party_has_at_most_one_terminal_outcome() {
        let log = random_sim(0).run(&mut NoopObserver).unwrap();
        assert!(!log.is_empty());

        for (_, rec) in log.iter() {
            match (rec.seated, rec.reneged) {
                (Some(seated), None) => {
                    // Seated parties always finish eating: the drain phase
                    // runs the floor empty.
                    let departed = rec.departed.expect("seated party never departed");
                    assert!(departed >= seated);
                    assert!(seated >= rec.arrived);
                }
                (None, Some(reneged)) => {
                    assert!(reneged >= rec.arrived);
                    assert_eq!(rec.departed, None);
                }
                (None, None) => assert_eq!(rec.departed, None), // abandoned at close
                (Some(_), Some(_)) => panic!("party both seated and reneged"),
            }
        }
    }

    #[test]
    fn identical_seeds_produce_identical_logs() {
        let a = random_sim(3).run(&mut NoopObserver).unwrap();
        let b = random_sim(3).run(&mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_trials_draw_different_streams() {
        let a = random_sim(0).run(&mut NoopObserver).unwrap();
        let b = random_sim(1).run(&mut NoopObserver).unwrap();
        assert_ne!(a, b);
    }
}

// ── Monte Carlo runner ────────────────────────────────────────────────────────

#[cfg(test)]
mod monte_carlo {
    use super::*;

    #[test]
    fn runs_trials_in_order_and_reproducibly() {
        let logs = run_trials(3, random_sim).unwrap();
        assert_eq!(logs.len(), 3);

        // Per-trial logs match standalone runs of the same trial index.
        for (k, log) in logs.iter().enumerate() {
            let solo = random_sim(k as u32).run(&mut NoopObserver).unwrap();
            assert_eq!(*log, solo);
        }
    }
}
