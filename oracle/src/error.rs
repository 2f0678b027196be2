use skycover_entropy::EntropyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("registration fee too low: paid {paid} raw, required {required} raw")]
    InsufficientFee { paid: u128, required: u128 },

    #[error("attestor {0} is already registered")]
    DuplicateRegistration(String),

    #[error("attestor {0} is not registered")]
    NotRegistered(String),

    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
