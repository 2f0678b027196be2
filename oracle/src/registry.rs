//! Attestor registration and pseudo-random index assignment.

use crate::attestor::Attestor;
use crate::error::OracleError;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use skycover_entropy::{EntropySource, LOOKBACK_WINDOW};
use skycover_types::{AccountId, Amount, Timestamp};
use std::collections::HashMap;
use std::sync::Arc;

type Blake2b256 = Blake2b<U32>;

/// Size of the broadcast index space: indexes are drawn from `[0, 10)`.
pub const INDEX_SPACE: u8 = 10;

/// Indexes assigned to each attestor at registration.
pub const INDEXES_PER_ATTESTOR: usize = 3;

/// Registry of oracle attestors.
pub struct OracleRegistry {
    attestors: HashMap<AccountId, Attestor>,
    entropy: Arc<dyn EntropySource>,
    registration_fee: Amount,
    /// Draw counter mixed into every index hash. Wraps modulo
    /// `LOOKBACK_WINDOW` so the derived lookback offset stays answerable.
    nonce: u64,
}

impl OracleRegistry {
    pub fn new(entropy: Arc<dyn EntropySource>, registration_fee: Amount) -> Self {
        Self {
            attestors: HashMap::new(),
            entropy,
            registration_fee,
            nonce: 0,
        }
    }

    /// Register `account` as an attestor against the paid fee.
    ///
    /// Returns the three assigned broadcast indexes.
    pub fn register(
        &mut self,
        account: &AccountId,
        paid_fee: Amount,
        now: Timestamp,
    ) -> Result<[u8; 3], OracleError> {
        if paid_fee < self.registration_fee {
            return Err(OracleError::InsufficientFee {
                paid: paid_fee.raw(),
                required: self.registration_fee.raw(),
            });
        }
        if self.attestors.contains_key(account) {
            return Err(OracleError::DuplicateRegistration(account.to_string()));
        }

        let indexes = self.generate_indexes(account)?;
        self.attestors.insert(
            account.clone(),
            Attestor {
                account: account.clone(),
                indexes,
                registered_at: now,
            },
        );
        tracing::debug!(attestor = %account, ?indexes, "attestor registered");
        Ok(indexes)
    }

    /// Whether `account` is a registered attestor.
    pub fn is_registered(&self, account: &AccountId) -> bool {
        self.attestors.contains_key(account)
    }

    /// The assigned indexes of a registered attestor.
    pub fn indexes_of(&self, account: &AccountId) -> Result<[u8; 3], OracleError> {
        self.attestors
            .get(account)
            .map(|a| a.indexes)
            .ok_or_else(|| OracleError::NotRegistered(account.to_string()))
    }

    /// Draw one pseudo-random index in `[0, INDEX_SPACE)`.
    ///
    /// Used both during registration and to pick the broadcast index of a
    /// status-fetch request.
    pub fn random_index(&mut self, account: &AccountId) -> Result<u8, OracleError> {
        let entropy = self.entropy.entropy_for(self.nonce)?;

        let mut hasher = Blake2b256::new();
        hasher.update(self.nonce.to_be_bytes());
        hasher.update(entropy);
        hasher.update(account.as_str().as_bytes());
        let digest = hasher.finalize();

        self.nonce = (self.nonce + 1) % LOOKBACK_WINDOW;
        Ok(digest[0] % INDEX_SPACE)
    }

    /// Generate `INDEXES_PER_ATTESTOR` pairwise-distinct indexes.
    ///
    /// Each colliding draw is rejected and redrawn; the nonce advances per
    /// draw, so the loop terminates even under a constant entropy source.
    fn generate_indexes(&mut self, account: &AccountId) -> Result<[u8; 3], OracleError> {
        let mut indexes = [0u8; INDEXES_PER_ATTESTOR];
        let mut assigned = 0;
        while assigned < INDEXES_PER_ATTESTOR {
            let candidate = self.random_index(account)?;
            if !indexes[..assigned].contains(&candidate) {
                indexes[assigned] = candidate;
                assigned += 1;
            }
        }
        Ok(indexes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycover_nullables::NullEntropy;

    fn account(name: &str) -> AccountId {
        AccountId::new(name)
    }

    fn registry() -> OracleRegistry {
        OracleRegistry::new(
            Arc::new(NullEntropy::constant([7u8; 32])),
            Amount::from_units(1),
        )
    }

    #[test]
    fn registration_assigns_three_distinct_indexes() {
        let mut reg = registry();
        let indexes = reg
            .register(&account("oracle-1"), Amount::from_units(1), Timestamp::EPOCH)
            .unwrap();

        assert!(indexes.iter().all(|i| *i < INDEX_SPACE));
        assert_ne!(indexes[0], indexes[1]);
        assert_ne!(indexes[0], indexes[2]);
        assert_ne!(indexes[1], indexes[2]);
    }

    #[test]
    fn insufficient_fee_rejected() {
        let mut reg = registry();
        let err = reg
            .register(&account("oracle-1"), Amount::new(1), Timestamp::EPOCH)
            .unwrap_err();

        assert!(matches!(err, OracleError::InsufficientFee { .. }));
        assert!(!reg.is_registered(&account("oracle-1")));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut reg = registry();
        reg.register(&account("oracle-1"), Amount::from_units(1), Timestamp::EPOCH)
            .unwrap();

        let err = reg
            .register(&account("oracle-1"), Amount::from_units(1), Timestamp::EPOCH)
            .unwrap_err();
        assert!(matches!(err, OracleError::DuplicateRegistration(_)));
    }

    #[test]
    fn indexes_are_stable_after_registration() {
        let mut reg = registry();
        let assigned = reg
            .register(&account("oracle-1"), Amount::from_units(1), Timestamp::EPOCH)
            .unwrap();

        assert_eq!(reg.indexes_of(&account("oracle-1")).unwrap(), assigned);
        // Further draws for other accounts do not disturb stored indexes.
        reg.random_index(&account("other")).unwrap();
        assert_eq!(reg.indexes_of(&account("oracle-1")).unwrap(), assigned);
    }

    #[test]
    fn unregistered_lookup_fails() {
        let reg = registry();
        assert!(matches!(
            reg.indexes_of(&account("ghost")),
            Err(OracleError::NotRegistered(_))
        ));
    }

    #[test]
    fn random_index_stays_in_range() {
        let mut reg = registry();
        for _ in 0..500 {
            let index = reg.random_index(&account("req")).unwrap();
            assert!(index < INDEX_SPACE);
        }
    }

    #[test]
    fn nonce_wraps_within_lookback_window() {
        let mut reg = registry();
        // More draws than the window size; every lookup must stay answerable
        // by a source holding only LOOKBACK_WINDOW values.
        for _ in 0..(LOOKBACK_WINDOW * 2) {
            reg.random_index(&account("req")).unwrap();
        }
    }

    #[test]
    fn entropy_failure_propagates() {
        let mut reg = OracleRegistry::new(Arc::new(NullEntropy::empty()), Amount::from_units(1));
        let err = reg
            .register(&account("oracle-1"), Amount::from_units(1), Timestamp::EPOCH)
            .unwrap_err();
        assert!(matches!(err, OracleError::Entropy(_)));
    }
}
