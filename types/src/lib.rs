//! Fundamental types for the skycover marketplace.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account identifiers, amounts, timestamps, flight status codes,
//! and the composite key fingerprints that tie flights and oracle requests
//! together.

pub mod address;
pub mod amount;
pub mod key;
pub mod status;
pub mod time;

pub use address::AccountId;
pub use amount::{Amount, UNIT_RAW};
pub use key::{FlightKey, RequestKey};
pub use status::FlightStatus;
pub use time::Timestamp;
