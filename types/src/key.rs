//! Composite key fingerprints for flights and oracle requests.
//!
//! A flight is identified by the Blake2b-256 fingerprint of
//! (airline, flight name, scheduled timestamp); an oracle request additionally
//! mixes in the broadcast index so concurrent requests for the same flight
//! aggregate independently.

use crate::{AccountId, Timestamp};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b fingerprint over multiple byte slices.
fn fingerprint(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Unique fingerprint of a flight: (airline, flight name, scheduled time).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightKey([u8; 32]);

impl FlightKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive the key for a flight.
    pub fn derive(airline: &AccountId, flight: &str, scheduled_at: Timestamp) -> Self {
        Self(fingerprint(&[
            airline.as_str().as_bytes(),
            flight.as_bytes(),
            &scheduled_at.as_secs().to_be_bytes(),
        ]))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for FlightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightKey({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for FlightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// Unique fingerprint of one status-fetch request:
/// (broadcast index, airline, flight name, scheduled time).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestKey([u8; 32]);

impl RequestKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive the key for a status-fetch request.
    pub fn derive(index: u8, airline: &AccountId, flight: &str, scheduled_at: Timestamp) -> Self {
        Self(fingerprint(&[
            &[index],
            airline.as_str().as_bytes(),
            flight.as_bytes(),
            &scheduled_at.as_secs().to_be_bytes(),
        ]))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestKey({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Minimal hex encoding; keys are the only hex consumers in this crate.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airline() -> AccountId {
        AccountId::new("airline-a")
    }

    #[test]
    fn flight_key_is_deterministic() {
        let k1 = FlightKey::derive(&airline(), "SC-100", Timestamp::new(1000));
        let k2 = FlightKey::derive(&airline(), "SC-100", Timestamp::new(1000));
        assert_eq!(k1, k2);
    }

    #[test]
    fn flight_key_separates_fields() {
        let base = FlightKey::derive(&airline(), "SC-100", Timestamp::new(1000));
        assert_ne!(
            base,
            FlightKey::derive(&airline(), "SC-101", Timestamp::new(1000))
        );
        assert_ne!(
            base,
            FlightKey::derive(&airline(), "SC-100", Timestamp::new(1001))
        );
        assert_ne!(
            base,
            FlightKey::derive(&AccountId::new("airline-b"), "SC-100", Timestamp::new(1000))
        );
    }

    #[test]
    fn request_key_depends_on_index() {
        let k1 = RequestKey::derive(3, &airline(), "SC-100", Timestamp::new(1000));
        let k2 = RequestKey::derive(4, &airline(), "SC-100", Timestamp::new(1000));
        assert_ne!(k1, k2);
    }
}
