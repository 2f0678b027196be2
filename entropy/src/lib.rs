//! Injectable entropy source for oracle index assignment.
//!
//! Index assignment must be reproducible in tests and unpredictable in
//! production, so the randomness feed is abstracted behind a trait. The
//! production implementation (`BlockBeacon`) replays recent block-derived
//! entropy values observed from the surrounding system; tests inject fixed
//! sequences instead.

pub mod beacon;
pub mod error;

pub use beacon::BlockBeacon;
pub use error::EntropyError;

/// How far back an entropy source is required to answer.
///
/// Nonces used for index generation wrap modulo this value so every lookback
/// offset the engine ever asks for stays inside the window.
pub const LOOKBACK_WINDOW: u64 = 251;

/// Trait for providing recent-history entropy.
pub trait EntropySource: Send + Sync {
    /// Entropy for a given lookback offset (0 = most recent).
    ///
    /// Must return the same bytes for the same offset for as long as no new
    /// value is observed; index assignment relies on this determinism.
    fn entropy_for(&self, lookback: u64) -> Result<[u8; 32], EntropyError>;

    /// Human-readable name of this entropy source.
    fn name(&self) -> &str;
}
