use skycover_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("proposer {0} is not a member")]
    NotAMember(String),

    #[error("candidate {0} is already registered")]
    DuplicateMember(String),

    #[error("{0} has already voted for this candidate")]
    DuplicateVote(String),

    #[error("candidate {0} was already admitted, ballot is closed")]
    AlreadyMember(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
