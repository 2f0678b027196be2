use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("lookback {requested} outside window of {available} observed values")]
    OutOfWindow { requested: u64, available: u64 },

    #[error("entropy source unavailable: {0}")]
    Unavailable(String),
}
