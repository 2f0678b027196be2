//! The admission voting engine.

use crate::ballot::Ballot;
use crate::error::GovernanceError;
use skycover_registry::AirlineRegistry;
use skycover_types::AccountId;
use std::collections::{HashMap, HashSet};

/// Result of a `propose_or_admit` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdmissionOutcome {
    /// Whether the candidate was admitted by this call.
    pub admitted: bool,
    /// Votes recorded for the candidate (0 during the founder phase).
    pub votes: u32,
}

/// Admission voting engine.
///
/// Owns the open ballots; membership state lives in the registry, which is
/// passed in per call so tests can run isolated instances.
pub struct VotingEngine {
    ballots: HashMap<AccountId, Ballot>,
    /// Candidates admitted through a ballot. Their ballots are discarded,
    /// and any further vote for them fails with `AlreadyMember`.
    closed: HashSet<AccountId>,
    founder_quota: u32,
}

impl VotingEngine {
    pub fn new(founder_quota: u32) -> Self {
        Self {
            ballots: HashMap::new(),
            closed: HashSet::new(),
            founder_quota,
        }
    }

    /// Propose `candidate` for membership, casting the proposer's vote.
    ///
    /// While membership is at or below the founder quota the candidate is
    /// admitted immediately with no vote recorded. Afterwards each call adds
    /// one vote; admission triggers the instant the vote count reaches 50%
    /// of the current membership.
    pub fn propose_or_admit(
        &mut self,
        registry: &mut AirlineRegistry,
        candidate_name: &str,
        candidate: &AccountId,
        proposer: &AccountId,
    ) -> Result<AdmissionOutcome, GovernanceError> {
        if !registry.is_member(proposer) {
            return Err(GovernanceError::NotAMember(proposer.to_string()));
        }
        if self.closed.contains(candidate) {
            return Err(GovernanceError::AlreadyMember(candidate.to_string()));
        }
        if registry.is_member(candidate) {
            return Err(GovernanceError::DuplicateMember(candidate.to_string()));
        }

        let members = registry.member_count();
        if members <= self.founder_quota {
            registry.admit(candidate_name, candidate)?;
            tracing::info!(candidate = %candidate, proposer = %proposer, "founder-phase admission");
            return Ok(AdmissionOutcome {
                admitted: true,
                votes: 0,
            });
        }

        let ballot = self.ballots.entry(candidate.clone()).or_default();
        let votes = ballot.cast(proposer)?;

        // Integer threshold: votes/members >= 1/2, scaled by 100 on both
        // sides so truncation cannot admit below the exact half.
        if u64::from(votes) * 100 >= u64::from(members) * 100 / 2 {
            registry.admit(candidate_name, candidate)?;
            self.ballots.remove(candidate);
            self.closed.insert(candidate.clone());
            tracing::info!(candidate = %candidate, votes, members, "ballot admission");
            return Ok(AdmissionOutcome {
                admitted: true,
                votes,
            });
        }

        Ok(AdmissionOutcome {
            admitted: false,
            votes,
        })
    }

    /// Votes currently recorded for a candidate.
    pub fn votes_for(&self, candidate: &AccountId) -> u32 {
        self.ballots.get(candidate).map(Ballot::count).unwrap_or(0)
    }
}
