//! Multiparty admission voting for the airline registry.
//!
//! Two regimes:
//! - **Founder phase**: while membership is at or below the founder quota,
//!   any member can admit a new airline unilaterally. This breaks the
//!   chicken-and-egg quorum deadlock of an empty registry.
//! - **Ballot phase**: afterwards, each admission needs votes from at least
//!   half the current membership. Percentage thresholds keep a small set of
//!   early members from permanently locking out new entrants as the network
//!   grows.

pub mod ballot;
pub mod engine;
pub mod error;

pub use ballot::Ballot;
pub use engine::{AdmissionOutcome, VotingEngine};
pub use error::GovernanceError;
