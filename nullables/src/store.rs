//! Nullable balance store — thread-safe in-memory accounting for testing.

use skycover_store::{BalanceStore, StoreError};
use skycover_types::{AccountId, Amount};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An in-memory balance store for testing.
///
/// Journals every capture and payout per account so tests can assert on the
/// money that crossed the boundary, and can be armed to fail the next
/// transfer to exercise error paths.
pub struct NullBalanceStore {
    captured: Mutex<HashMap<String, Amount>>,
    paid: Mutex<HashMap<String, Amount>>,
    fail_next_transfer: AtomicBool,
}

impl NullBalanceStore {
    pub fn new() -> Self {
        Self {
            captured: Mutex::new(HashMap::new()),
            paid: Mutex::new(HashMap::new()),
            fail_next_transfer: AtomicBool::new(false),
        }
    }

    /// Total captured from `account` via `deposit_from`.
    pub fn captured_from(&self, account: &AccountId) -> Amount {
        self.captured
            .lock()
            .unwrap()
            .get(account.as_str())
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Total paid out to `account` via `transfer`.
    pub fn paid_to(&self, account: &AccountId) -> Amount {
        self.paid
            .lock()
            .unwrap()
            .get(account.as_str())
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// Make the next `transfer` call fail with a backend error.
    pub fn fail_next_transfer(&self) {
        self.fail_next_transfer.store(true, Ordering::SeqCst);
    }
}

impl Default for NullBalanceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceStore for NullBalanceStore {
    fn transfer(&self, account: &AccountId, amount: Amount) -> Result<(), StoreError> {
        if self.fail_next_transfer.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Backend("transfer failed (test)".into()));
        }
        let mut paid = self.paid.lock().unwrap();
        let entry = paid
            .entry(account.as_str().to_string())
            .or_insert(Amount::ZERO);
        *entry = entry.saturating_add(amount);
        Ok(())
    }

    fn deposit_from(&self, account: &AccountId, amount: Amount) -> Result<(), StoreError> {
        let mut captured = self.captured.lock().unwrap();
        let entry = captured
            .entry(account.as_str().to_string())
            .or_insert(Amount::ZERO);
        *entry = entry.saturating_add(amount);
        Ok(())
    }
}
