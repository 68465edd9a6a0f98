use seat_core::PartyId;
use seat_floor::FloorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A committed pairing violated a floor precondition — a policy bug;
    /// the trial is aborted.
    #[error("floor rejected a committed pairing: {0}")]
    Floor(#[from] FloorError),

    /// A pairing named a party that is not in the wait queue.
    #[error("policy proposed {0}, which is not waiting")]
    UnknownParty(PartyId),

    /// A pairing named the same party twice in one batch.
    #[error("policy proposed {0} more than once in one batch")]
    DuplicateParty(PartyId),
}

pub type SimResult<T> = Result<T, SimError>;
