//! External balance store boundary.

use crate::StoreError;
use skycover_types::{AccountId, Amount};

/// The external store holding real account balances.
///
/// The insurance ledger touches it in exactly two places: capturing a
/// premium on coverage purchase (`deposit_from`) and paying out an
/// accumulated credit on withdrawal (`transfer`). Everything in between is
/// internal bookkeeping.
pub trait BalanceStore: Send + Sync {
    /// Move `amount` out of the store to `account` (payout).
    fn transfer(&self, account: &AccountId, amount: Amount) -> Result<(), StoreError>;

    /// Capture `amount` from `account` into the store (premium escrow).
    fn deposit_from(&self, account: &AccountId, amount: Amount) -> Result<(), StoreError>;
}
