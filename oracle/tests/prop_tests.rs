use proptest::prelude::*;
use std::sync::Arc;

use skycover_nullables::NullEntropy;
use skycover_oracle::{OracleRegistry, INDEX_SPACE};
use skycover_types::{AccountId, Amount, Timestamp};

proptest! {
    /// Index assignment always yields 3 pairwise-distinct values in range,
    /// whatever entropy the source supplies.
    #[test]
    fn assigned_indexes_distinct_and_in_range(
        seeds in prop::collection::vec(prop::array::uniform32(0u8..), 1..8),
        name in "[a-z0-9]{1,16}",
    ) {
        let entropy = Arc::new(NullEntropy::new(seeds));
        let mut registry = OracleRegistry::new(entropy, Amount::from_units(1));

        let indexes = registry
            .register(&AccountId::new(name), Amount::from_units(1), Timestamp::EPOCH)
            .unwrap();

        prop_assert!(indexes.iter().all(|i| *i < INDEX_SPACE));
        prop_assert_ne!(indexes[0], indexes[1]);
        prop_assert_ne!(indexes[0], indexes[2]);
        prop_assert_ne!(indexes[1], indexes[2]);
    }

    /// Broadcast index draws are always in range.
    #[test]
    fn random_index_in_range(
        seed in prop::array::uniform32(0u8..),
        name in "[a-z0-9]{1,16}",
        draws in 1usize..64,
    ) {
        let entropy = Arc::new(NullEntropy::constant(seed));
        let mut registry = OracleRegistry::new(entropy, Amount::from_units(1));
        let account = AccountId::new(name);

        for _ in 0..draws {
            prop_assert!(registry.random_index(&account).unwrap() < INDEX_SPACE);
        }
    }
}
