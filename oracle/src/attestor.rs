//! Registered attestor record.

use serde::{Deserialize, Serialize};
use skycover_types::{AccountId, Timestamp};

/// A registered oracle attestor and its assigned broadcast indexes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attestor {
    pub account: AccountId,
    /// Three pairwise-distinct indexes in `[0, INDEX_SPACE)`.
    /// Immutable once assigned.
    pub indexes: [u8; 3],
    pub registered_at: Timestamp,
}

impl Attestor {
    /// Whether this attestor holds the given broadcast index.
    pub fn has_index(&self, index: u8) -> bool {
        self.indexes.contains(&index)
    }
}
