//! The `Sim` struct and its event loop.

use seat_core::{Party, PartyId, SimConfig, SimTime, TrialRng};
use seat_floor::Floor;
use seat_policy::SeatingPolicy;

use crate::arrivals::{Arrival, ArrivalSource, PatienceSource, ServiceSource};
use crate::{SimError, SimObserver, SimResult, TrialLog, WaitQueue};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The event-driven engine for one trial.
///
/// `Sim` merges two time-ordered streams — the arrival source and the
/// floor's departure schedule — into one timeline, mutating the wait queue
/// and the floor at each event and offering the queue to the seating policy
/// whenever the world changed.  It exclusively owns every piece of mutable
/// trial state, so a trial is deterministic given its samplers and RNG.
///
/// A trial moves through three phases: *running* (arrivals still being
/// generated), *draining* (horizon passed, departures only — announced via
/// [`SimObserver::on_close`]), and *finished* (floor empty, log complete —
/// [`SimObserver::on_trial_end`]).
///
/// Create via [`SimBuilder`][crate::SimBuilder]; a `Sim` runs exactly once.
pub struct Sim<P, A, S, T> {
    pub(crate) config:   SimConfig,
    pub(crate) floor:    Floor,
    pub(crate) policy:   P,
    pub(crate) arrivals: A,
    pub(crate) service:  S,
    pub(crate) patience: T,
    pub(crate) rng:      TrialRng,

    queue:      WaitQueue,
    log:        TrialLog,
    next_party: u32,
}

impl<P, A, S, T> Sim<P, A, S, T>
where
    P: SeatingPolicy,
    A: ArrivalSource,
    S: ServiceSource,
    T: PatienceSource,
{
    pub(crate) fn new(
        config:   SimConfig,
        floor:    Floor,
        policy:   P,
        arrivals: A,
        service:  S,
        patience: T,
        rng:      TrialRng,
    ) -> Self {
        Self {
            config,
            floor,
            policy,
            arrivals,
            service,
            patience,
            rng,
            queue:      WaitQueue::new(),
            log:        TrialLog::new(),
            next_party: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the trial to completion and return its log.
    ///
    /// Consumes the `Sim`: a trial always runs from open to `Finished`, and
    /// state from a finished trial is never reused.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<TrialLog> {
        let horizon = self.config.horizon();
        let mut next_arrival = self.arrivals.next_arrival(SimTime::ZERO, &mut self.rng);

        // ── Running: merge arrivals and departures ────────────────────────
        while next_arrival.at < horizon {
            if next_arrival.at <= self.floor.next_departure() {
                // Arrival first on ties, so a party walking in the instant a
                // table frees still waits for that departure to process.
                let now = next_arrival.at;
                self.admit(next_arrival, observer);
                next_arrival = self.arrivals.next_arrival(now, &mut self.rng);
                self.purge_reneged(now, observer);
                self.offer_seats(now, observer)?;
            } else {
                let now = self.floor.next_departure();
                let party = self.floor.pop_departure()?;
                self.log.mark_departed(party.id, now);
                observer.on_departure(now, &party);
                self.purge_reneged(now, observer);
                self.offer_seats(now, observer)?;
            }
        }

        // ── Draining: the door is closed, everyone finishes eating ────────
        //
        // No further seatings: parties still waiting are abandoned with
        // neither a seated nor a reneged mark.
        observer.on_close(horizon);
        while !self.floor.is_empty() {
            let now = self.floor.next_departure();
            let party = self.floor.pop_departure()?;
            self.log.mark_departed(party.id, now);
            observer.on_departure(now, &party);
        }

        observer.on_trial_end(&self.log);
        Ok(self.log)
    }

    // ── Event processing ──────────────────────────────────────────────────

    /// Create the party record for one arrival and enqueue it.
    fn admit<O: SimObserver>(&mut self, arrival: Arrival, observer: &mut O) {
        let id = PartyId(self.next_party);
        self.next_party += 1;

        let service_secs = self.service.service_secs(arrival.size, &mut self.rng);
        let patience_until = self.patience.deadline(arrival.at, &mut self.rng);
        let party = Party {
            id,
            size: arrival.size,
            arrived: arrival.at,
            service_secs,
            patience_until,
        };

        self.log.record_arrival(&party);
        self.queue.push(party);
        observer.on_arrival(arrival.at, &party);
    }

    /// Drop every waiting party whose patience expired by `now` — always
    /// before the policy sees the queue at a new time.
    fn purge_reneged<O: SimObserver>(&mut self, now: SimTime, observer: &mut O) {
        for (party, deadline) in self.queue.purge_reneged(now) {
            self.log.mark_reneged(party.id, deadline);
            observer.on_renege(deadline, party.id);
        }
    }

    /// Invoke the policy on a fresh snapshot and commit what it proposes.
    fn offer_seats<O: SimObserver>(&mut self, now: SimTime, observer: &mut O) -> SimResult<()> {
        let snapshot = self.floor.available_tables();

        // Explicit field borrows so the borrow checker sees disjoint access.
        let policy = &mut self.policy;
        let queue = &self.queue;
        let rng = &mut self.rng;
        let pairings = policy.propose(queue.as_slice(), &snapshot, now, rng);

        let mut seated: Vec<PartyId> = Vec::with_capacity(pairings.len());
        for pairing in pairings {
            if seated.contains(&pairing.party) {
                return Err(SimError::DuplicateParty(pairing.party));
            }
            let party = self
                .queue
                .get(pairing.party)
                .ok_or(SimError::UnknownParty(pairing.party))?;

            self.floor.seat(&pairing.tables, party, now)?;
            self.log.mark_seated(party.id, now);
            observer.on_seated(now, &party, &pairing.tables);
            seated.push(party.id);
        }
        self.queue.remove_seated(&seated);
        Ok(())
    }
}
