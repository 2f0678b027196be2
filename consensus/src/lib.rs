//! Oracle response aggregation.
//!
//! Each status-fetch request opens a consensus session keyed by
//! (broadcast index, airline, flight, scheduled time). Attestors holding the
//! broadcast index submit status responses; the first status backed by a
//! majority of distinct attestors finalizes the session. Responses arrive
//! asynchronously and out of order; nothing here assumes delivery order.

pub mod aggregator;
pub mod error;
pub mod session;

pub use aggregator::{ConsensusAggregator, FinalizedOutcome};
pub use error::ConsensusError;
pub use session::{ConsensusSession, DuplicatePolicy};
