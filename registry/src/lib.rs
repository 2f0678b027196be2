//! Airline participant registry.
//!
//! Records which airlines are members of the marketplace and whether they
//! have met the funding threshold that activates their participation.
//! Admission decisions are made elsewhere (the governance voting engine);
//! this crate only holds the resulting state.

pub mod airline;
pub mod error;
pub mod registry;

pub use airline::Airline;
pub use error::RegistryError;
pub use registry::AirlineRegistry;
