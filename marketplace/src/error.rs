use skycover_consensus::ConsensusError;
use skycover_governance::GovernanceError;
use skycover_ledger::LedgerError;
use skycover_oracle::OracleError;
use skycover_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketplaceError {
    #[error("marketplace is not operational")]
    NotOperational,

    #[error("airline {0} has not met the funding threshold")]
    AirlineNotFunded(String),

    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Consensus(#[from] ConsensusError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
