//! The insurance ledger — escrow purchase, credit pass, withdrawal.

use crate::coverage::Coverage;
use crate::error::LedgerError;
use crate::flight::FlightTable;
use skycover_registry::{AirlineRegistry, RegistryError};
use skycover_store::BalanceStore;
use skycover_types::{AccountId, Amount, FlightKey, Timestamp};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Coverage purchases, credit balances, and the finalize-once credit guard.
///
/// Every mutating operation validates all preconditions before touching any
/// state, so a failure leaves the ledger exactly as it was.
pub struct InsuranceLedger {
    coverages: HashMap<FlightKey, Vec<Coverage>>,
    credits: HashMap<AccountId, Amount>,
    /// Flights whose credit pass has already run.
    credited: HashSet<FlightKey>,
    min_premium: Amount,
    balance_store: Arc<dyn BalanceStore>,
}

impl InsuranceLedger {
    pub fn new(min_premium: Amount, balance_store: Arc<dyn BalanceStore>) -> Self {
        Self {
            coverages: HashMap::new(),
            credits: HashMap::new(),
            credited: HashSet::new(),
            min_premium,
            balance_store,
        }
    }

    /// Purchase coverage for a flight.
    ///
    /// Captures the premium from the buyer via the balance store and holds
    /// it in the airline's fund balance pending possible payout.
    pub fn purchase(
        &mut self,
        registry: &mut AirlineRegistry,
        flights: &FlightTable,
        buyer: &AccountId,
        airline: &AccountId,
        key: FlightKey,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), LedgerError> {
        if amount < self.min_premium {
            return Err(LedgerError::BelowMinimumPremium {
                paid: amount.raw(),
                min: self.min_premium.raw(),
            });
        }
        if !flights.is_registered(&key) {
            return Err(LedgerError::FlightNotRegistered);
        }

        self.balance_store.deposit_from(buyer, amount)?;
        registry.deposit_premium(airline, amount)?;
        self.coverages.entry(key).or_default().push(Coverage {
            insured: buyer.clone(),
            amount_paid: amount,
            purchased_at: now,
        });
        tracing::debug!(buyer = %buyer, flight = %key, premium = %amount, "coverage purchased");
        Ok(())
    }

    /// Run the one-time credit pass for a flight.
    ///
    /// Each buyer is credited `amount_paid * credit_percentage / 100`
    /// (integer floor) and the same total is debited from the airline fund.
    pub fn credit_insurees(
        &mut self,
        registry: &mut AirlineRegistry,
        airline: &AccountId,
        key: FlightKey,
        credit_percentage: u32,
    ) -> Result<(), LedgerError> {
        if self.credited.contains(&key) {
            return Err(LedgerError::AlreadyCredited);
        }
        if registry.get(airline).is_none() {
            return Err(RegistryError::UnknownAirline(airline.to_string()).into());
        }
        self.credited.insert(key);

        let coverages = self.coverages.get(&key).map(Vec::as_slice).unwrap_or(&[]);
        for coverage in coverages {
            let credit = coverage.amount_paid.percent(credit_percentage);
            let entry = self
                .credits
                .entry(coverage.insured.clone())
                .or_insert(Amount::ZERO);
            *entry = entry.saturating_add(credit);
            registry.debit_fund(airline, credit)?;
            tracing::debug!(insured = %coverage.insured, %credit, flight = %key, "insuree credited");
        }
        tracing::info!(flight = %key, buyers = coverages.len(), "credit pass complete");
        Ok(())
    }

    /// Withdraw the caller's accumulated credit balance.
    ///
    /// Pays out through the balance store first and only then zeroes the
    /// entry, so a failed transfer leaves the credit intact.
    pub fn withdraw(&mut self, account: &AccountId) -> Result<Amount, LedgerError> {
        let balance = self.credit_of(account);
        if balance.is_zero() {
            return Err(LedgerError::NothingToWithdraw(account.to_string()));
        }

        self.balance_store.transfer(account, balance)?;
        self.credits.remove(account);
        tracing::info!(account = %account, amount = %balance, "credit withdrawn");
        Ok(balance)
    }

    /// Current credit balance of an account.
    pub fn credit_of(&self, account: &AccountId) -> Amount {
        self.credits.get(account).copied().unwrap_or(Amount::ZERO)
    }

    /// Coverage entries recorded for a flight.
    pub fn coverages_for(&self, key: &FlightKey) -> &[Coverage] {
        self.coverages.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}
