//! Insurance ledger.
//!
//! Tracks registered flights, escrow coverage purchases against them, and the
//! per-account credit balances produced when a flight outcome triggers a
//! payout. Real money only moves at the two edges, premium capture and
//! withdrawal, through the external [`BalanceStore`].
//!
//! [`BalanceStore`]: skycover_store::BalanceStore

pub mod coverage;
pub mod error;
pub mod flight;
pub mod ledger;

pub use coverage::Coverage;
pub use error::LedgerError;
pub use flight::{Flight, FlightTable};
pub use ledger::InsuranceLedger;
