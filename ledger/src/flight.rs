//! Registered flights and their consensus-established status.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use skycover_types::{AccountId, FlightKey, FlightStatus, Timestamp};
use std::collections::HashMap;

/// A flight offered for coverage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Flight {
    pub name: String,
    pub airline: AccountId,
    pub is_registered: bool,
    /// Set exactly once, by the first finalized consensus session.
    pub status: FlightStatus,
    pub scheduled_at: Timestamp,
    pub updated_at: Timestamp,
}

/// All registered flights, keyed by fingerprint.
#[derive(Default)]
pub struct FlightTable {
    flights: HashMap<FlightKey, Flight>,
}

impl FlightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flight. The key is derived from (airline, name, time).
    pub fn register(
        &mut self,
        name: &str,
        airline: &AccountId,
        scheduled_at: Timestamp,
    ) -> Result<FlightKey, LedgerError> {
        let key = FlightKey::derive(airline, name, scheduled_at);
        if self.flights.contains_key(&key) {
            return Err(LedgerError::FlightAlreadyRegistered);
        }
        self.flights.insert(
            key,
            Flight {
                name: name.to_string(),
                airline: airline.clone(),
                is_registered: true,
                status: FlightStatus::Unknown,
                scheduled_at,
                updated_at: scheduled_at,
            },
        );
        Ok(key)
    }

    pub fn is_registered(&self, key: &FlightKey) -> bool {
        self.flights.contains_key(key)
    }

    pub fn get(&self, key: &FlightKey) -> Option<&Flight> {
        self.flights.get(key)
    }

    /// Consensus-established status of a flight, if registered.
    pub fn status(&self, key: &FlightKey) -> Option<FlightStatus> {
        self.flights.get(key).map(|f| f.status)
    }

    /// Apply a finalized consensus outcome to the flight.
    ///
    /// The status is written only while it is still `Unknown`; a later
    /// session for the same flight cannot overwrite it. Returns whether the
    /// status was applied by this call.
    pub fn apply_status(&mut self, key: &FlightKey, status: FlightStatus, now: Timestamp) -> bool {
        match self.flights.get_mut(key) {
            Some(flight) if flight.status == FlightStatus::Unknown => {
                flight.status = status;
                flight.updated_at = now;
                true
            }
            _ => false,
        }
    }
}
