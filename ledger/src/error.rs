use skycover_registry::RegistryError;
use skycover_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("flight is already registered")]
    FlightAlreadyRegistered,

    #[error("flight is not registered")]
    FlightNotRegistered,

    #[error("premium too low: paid {paid} raw, minimum {min} raw")]
    BelowMinimumPremium { paid: u128, min: u128 },

    #[error("insurees were already credited for this flight")]
    AlreadyCredited,

    #[error("no credit balance to withdraw for {0}")]
    NothingToWithdraw(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
