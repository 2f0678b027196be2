//! Per-candidate admission ballot.

use crate::error::GovernanceError;
use serde::{Deserialize, Serialize};
use skycover_types::AccountId;
use std::collections::HashSet;

/// An open ballot for one candidate airline.
///
/// Created lazily on the first vote; discarded once the candidate is
/// admitted. Each member may cast at most one vote.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ballot {
    voters: HashSet<AccountId>,
}

impl Ballot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote from `voter`. Returns the updated vote count.
    pub fn cast(&mut self, voter: &AccountId) -> Result<u32, GovernanceError> {
        if !self.voters.insert(voter.clone()) {
            return Err(GovernanceError::DuplicateVote(voter.to_string()));
        }
        Ok(self.count())
    }

    /// Number of distinct votes cast so far.
    pub fn count(&self) -> u32 {
        self.voters.len() as u32
    }

    /// Whether `voter` has already voted.
    pub fn has_voted(&self, voter: &AccountId) -> bool {
        self.voters.contains(voter)
    }
}
