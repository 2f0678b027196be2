//! Escrow coverage records.

use serde::{Deserialize, Serialize};
use skycover_types::{AccountId, Amount, Timestamp};

/// One buyer's paid escrow entitlement against a flight's outcome.
///
/// Read-only after purchase except for the one-time credit pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Coverage {
    pub insured: AccountId,
    pub amount_paid: Amount,
    pub purchased_at: Timestamp,
}
