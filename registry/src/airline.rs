//! Airline membership record.

use serde::{Deserialize, Serialize};
use skycover_types::{AccountId, Amount};

/// A marketplace member airline.
///
/// Created on admission and never deleted. `fund_balance` tracks the
/// airline's escrow pool: seeded by funding, grown by premiums, drained by
/// insurance credits.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Airline {
    pub name: String,
    pub account: AccountId,
    pub is_registered: bool,
    /// Whether the airline has met the minimum funding threshold.
    /// Set once the balance first reaches the threshold; never unset.
    pub is_funded: bool,
    pub fund_balance: Amount,
}

impl Airline {
    pub fn new(name: impl Into<String>, account: AccountId) -> Self {
        Self {
            name: name.into(),
            account,
            is_registered: true,
            is_funded: false,
            fund_balance: Amount::ZERO,
        }
    }
}
