//! Consensus session state machine.

use crate::error::ConsensusError;
use serde::{Deserialize, Serialize};
use skycover_types::{AccountId, FlightStatus, RequestKey, Timestamp};
use std::collections::{HashMap, HashSet};

/// How a session treats a repeat submission from the same attestor for the
/// same status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Record and ignore. The response set is keyed by attestor, so a
    /// duplicate can never advance the count toward quorum.
    #[default]
    Tolerate,
    /// Surface duplicates as errors.
    Reject,
}

/// Result of recording one response into a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedResponse {
    /// Distinct attestors now backing the submitted status.
    pub distinct: u32,
    /// Whether this submission was the first from its attestor for the status.
    pub fresh: bool,
}

/// The open aggregation window tied to one status-fetch request.
///
/// Stays open for recording even after finalization; `finalized` remembers
/// the winning status so the outcome is only ever produced once.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsensusSession {
    pub key: RequestKey,
    pub requester: AccountId,
    pub opened_at: Timestamp,
    responses: HashMap<FlightStatus, HashSet<AccountId>>,
    finalized: Option<FlightStatus>,
}

impl ConsensusSession {
    pub fn new(key: RequestKey, requester: AccountId, opened_at: Timestamp) -> Self {
        Self {
            key,
            requester,
            opened_at,
            responses: HashMap::new(),
            finalized: None,
        }
    }

    /// Record a response from `attestor` for `status`.
    pub fn record(
        &mut self,
        attestor: &AccountId,
        status: FlightStatus,
        policy: DuplicatePolicy,
    ) -> Result<RecordedResponse, ConsensusError> {
        let set = self.responses.entry(status).or_default();
        let fresh = set.insert(attestor.clone());
        if !fresh && policy == DuplicatePolicy::Reject {
            return Err(ConsensusError::DuplicateResponse(attestor.to_string()));
        }
        Ok(RecordedResponse {
            distinct: set.len() as u32,
            fresh,
        })
    }

    /// Distinct attestors backing `status` so far.
    pub fn response_count(&self, status: FlightStatus) -> u32 {
        self.responses
            .get(&status)
            .map(|set| set.len() as u32)
            .unwrap_or(0)
    }

    /// The winning status, if the session has finalized.
    pub fn finalized(&self) -> Option<FlightStatus> {
        self.finalized
    }

    /// Mark the session finalized for `status`. First call wins.
    pub(crate) fn finalize(&mut self, status: FlightStatus) -> bool {
        if self.finalized.is_some() {
            return false;
        }
        self.finalized = Some(status);
        true
    }
}
