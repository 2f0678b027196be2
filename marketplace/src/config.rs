//! Marketplace configuration.

use serde::{Deserialize, Serialize};
use skycover_consensus::DuplicatePolicy;
use skycover_types::Amount;

/// All tunable marketplace parameters.
///
/// The escrow currency unit and the fee schedule are deployment
/// configuration, not engine logic; hosts override the defaults as needed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    /// Members admitted without a vote before threshold ballots begin.
    pub founder_quota: u32,

    /// Distinct oracle responses a single status needs to finalize a session.
    pub min_oracle_responses: u32,

    /// Fee an oracle attestor pays at registration.
    pub oracle_registration_fee: Amount,

    /// Smallest accepted coverage premium.
    pub min_premium: Amount,

    /// Balance an airline must deposit before it can register flights.
    pub min_airline_funding: Amount,

    /// Payout credit as a percentage of the premium (150 = 1.5x).
    pub credit_percentage: u32,

    /// How the aggregator treats repeat responses from the same attestor.
    pub duplicate_policy: DuplicatePolicy,
}

impl MarketplaceConfig {
    /// The intended production configuration.
    pub fn marketplace_defaults() -> Self {
        Self {
            founder_quota: 4,
            min_oracle_responses: 3,
            oracle_registration_fee: Amount::from_units(1),
            min_premium: Amount::new(1),
            min_airline_funding: Amount::from_units(10),
            credit_percentage: 150,
            duplicate_policy: DuplicatePolicy::Tolerate,
        }
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self::marketplace_defaults()
    }
}
