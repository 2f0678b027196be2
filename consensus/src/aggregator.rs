//! The consensus aggregator — session map plus majority detection.

use crate::error::ConsensusError;
use crate::session::{ConsensusSession, DuplicatePolicy};
use skycover_types::{AccountId, FlightKey, FlightStatus, RequestKey, Timestamp};
use std::collections::HashMap;

/// A finalized consensus outcome, handed to the insurance ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizedOutcome {
    pub flight_key: FlightKey,
    pub airline: AccountId,
    pub flight: String,
    pub scheduled_at: Timestamp,
    pub status: FlightStatus,
    /// Distinct attestors that backed the winning status at finalization.
    pub responses: u32,
}

/// Collects attestation responses keyed by request and detects majority.
pub struct ConsensusAggregator {
    sessions: HashMap<RequestKey, ConsensusSession>,
    /// Distinct responses a single status needs to finalize a session.
    min_responses: u32,
    duplicate_policy: DuplicatePolicy,
}

impl ConsensusAggregator {
    pub fn new(min_responses: u32, duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            sessions: HashMap::new(),
            min_responses,
            duplicate_policy,
        }
    }

    /// Open a session for a status-fetch request.
    ///
    /// A repeated request under the same derived key replaces the previous
    /// session. There is no reopening, only new sessions.
    pub fn open_session(&mut self, key: RequestKey, requester: &AccountId, now: Timestamp) {
        self.sessions
            .insert(key, ConsensusSession::new(key, requester.clone(), now));
    }

    /// Whether an open session exists for `key`.
    pub fn has_session(&self, key: &RequestKey) -> bool {
        self.sessions.contains_key(key)
    }

    /// Submit one attestor response.
    ///
    /// `assigned` is the submitting attestor's index assignment; the
    /// submission is rejected unless `index` is among them and a session is
    /// open for the derived request key. Returns the finalized outcome the
    /// first time any status crosses the threshold and `None` otherwise;
    /// later responses are still recorded but never produce a second
    /// outcome.
    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        &mut self,
        attestor: &AccountId,
        assigned: &[u8; 3],
        index: u8,
        airline: &AccountId,
        flight: &str,
        scheduled_at: Timestamp,
        status: FlightStatus,
    ) -> Result<Option<FinalizedOutcome>, ConsensusError> {
        if !assigned.contains(&index) {
            return Err(ConsensusError::IndexMismatch { index });
        }

        let key = RequestKey::derive(index, airline, flight, scheduled_at);
        let session = self
            .sessions
            .get_mut(&key)
            .ok_or(ConsensusError::SessionNotOpen)?;

        let recorded = session.record(attestor, status, self.duplicate_policy)?;
        tracing::debug!(
            %key,
            attestor = %attestor,
            %status,
            distinct = recorded.distinct,
            "oracle response recorded"
        );

        if recorded.distinct >= self.min_responses && session.finalize(status) {
            tracing::info!(%key, %status, responses = recorded.distinct, "consensus reached");
            return Ok(Some(FinalizedOutcome {
                flight_key: FlightKey::derive(airline, flight, scheduled_at),
                airline: airline.clone(),
                flight: flight.to_string(),
                scheduled_at,
                status,
                responses: recorded.distinct,
            }));
        }
        Ok(None)
    }

    /// Look up a session (primarily for inspection in tests and hosts).
    pub fn session(&self, key: &RequestKey) -> Option<&ConsensusSession> {
        self.sessions.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSIGNED: [u8; 3] = [1, 4, 7];

    fn account(name: &str) -> AccountId {
        AccountId::new(name)
    }

    fn aggregator() -> ConsensusAggregator {
        ConsensusAggregator::new(3, DuplicatePolicy::Tolerate)
    }

    fn open(agg: &mut ConsensusAggregator, index: u8) -> RequestKey {
        let key = RequestKey::derive(index, &account("air"), "SC-1", Timestamp::new(100));
        agg.open_session(key, &account("buyer"), Timestamp::new(100));
        key
    }

    fn submit(
        agg: &mut ConsensusAggregator,
        attestor: &str,
        index: u8,
        status: FlightStatus,
    ) -> Result<Option<FinalizedOutcome>, ConsensusError> {
        agg.submit(
            &account(attestor),
            &ASSIGNED,
            index,
            &account("air"),
            "SC-1",
            Timestamp::new(100),
            status,
        )
    }

    #[test]
    fn index_mismatch_rejected() {
        let mut agg = aggregator();
        open(&mut agg, 1);

        let err = submit(&mut agg, "o1", 2, FlightStatus::OnTime).unwrap_err();
        assert!(matches!(err, ConsensusError::IndexMismatch { index: 2 }));
    }

    #[test]
    fn submission_without_session_rejected() {
        let mut agg = aggregator();
        let err = submit(&mut agg, "o1", 1, FlightStatus::OnTime).unwrap_err();
        assert!(matches!(err, ConsensusError::SessionNotOpen));
    }

    #[test]
    fn majority_finalizes_session() {
        let mut agg = aggregator();
        open(&mut agg, 1);

        assert!(submit(&mut agg, "o1", 1, FlightStatus::LateAirline).unwrap().is_none());
        assert!(submit(&mut agg, "o2", 1, FlightStatus::LateAirline).unwrap().is_none());

        let outcome = submit(&mut agg, "o3", 1, FlightStatus::LateAirline)
            .unwrap()
            .expect("third distinct response should finalize");
        assert_eq!(outcome.status, FlightStatus::LateAirline);
        assert_eq!(outcome.responses, 3);
        assert_eq!(
            outcome.flight_key,
            FlightKey::derive(&account("air"), "SC-1", Timestamp::new(100))
        );
    }

    #[test]
    fn minority_statuses_do_not_finalize() {
        let mut agg = aggregator();
        open(&mut agg, 1);

        assert!(submit(&mut agg, "o1", 1, FlightStatus::OnTime).unwrap().is_none());
        assert!(submit(&mut agg, "o2", 1, FlightStatus::LateWeather).unwrap().is_none());
        assert!(submit(&mut agg, "o3", 1, FlightStatus::LateAirline).unwrap().is_none());
    }

    #[test]
    fn finalize_once_per_session() {
        let mut agg = aggregator();
        let key = open(&mut agg, 1);

        for attestor in ["o1", "o2", "o3"] {
            submit(&mut agg, attestor, 1, FlightStatus::LateAirline).unwrap();
        }

        // A competing status crossing the threshold later is recorded but
        // produces no second outcome.
        for attestor in ["o4", "o5", "o6"] {
            let outcome = submit(&mut agg, attestor, 1, FlightStatus::OnTime).unwrap();
            assert!(outcome.is_none());
        }
        let session = agg.session(&key).unwrap();
        assert_eq!(session.finalized(), Some(FlightStatus::LateAirline));
        assert_eq!(session.response_count(FlightStatus::OnTime), 3);
    }

    #[test]
    fn duplicate_attestor_does_not_reach_quorum() {
        let mut agg = aggregator();
        open(&mut agg, 1);

        submit(&mut agg, "o1", 1, FlightStatus::LateAirline).unwrap();
        submit(&mut agg, "o1", 1, FlightStatus::LateAirline).unwrap();
        let outcome = submit(&mut agg, "o1", 1, FlightStatus::LateAirline).unwrap();

        assert!(outcome.is_none());
    }

    #[test]
    fn reissued_request_replaces_session() {
        let mut agg = aggregator();
        let key = open(&mut agg, 1);
        submit(&mut agg, "o1", 1, FlightStatus::OnTime).unwrap();

        // Same flight, same index: the new session starts from scratch.
        agg.open_session(key, &account("buyer"), Timestamp::new(200));
        let session = agg.session(&key).unwrap();
        assert_eq!(session.response_count(FlightStatus::OnTime), 0);
        assert_eq!(session.opened_at, Timestamp::new(200));
    }

    #[test]
    fn sessions_with_different_indexes_are_independent() {
        let mut agg = aggregator();
        open(&mut agg, 1);
        open(&mut agg, 4);

        submit(&mut agg, "o1", 1, FlightStatus::LateAirline).unwrap();
        submit(&mut agg, "o2", 4, FlightStatus::LateAirline).unwrap();

        let k1 = RequestKey::derive(1, &account("air"), "SC-1", Timestamp::new(100));
        let k4 = RequestKey::derive(4, &account("air"), "SC-1", Timestamp::new(100));
        assert_eq!(agg.session(&k1).unwrap().response_count(FlightStatus::LateAirline), 1);
        assert_eq!(agg.session(&k4).unwrap().response_count(FlightStatus::LateAirline), 1);
    }
}
