//! The airline registry — owned state, injected into the engines that use it.

use crate::airline::Airline;
use crate::error::RegistryError;
use skycover_types::{AccountId, Amount};
use std::collections::HashMap;

/// Registry of member airlines and their funding state.
pub struct AirlineRegistry {
    airlines: HashMap<AccountId, Airline>,
    /// Balance an airline must reach before `is_funded` is set.
    min_funding: Amount,
}

impl AirlineRegistry {
    pub fn new(min_funding: Amount) -> Self {
        Self {
            airlines: HashMap::new(),
            min_funding,
        }
    }

    /// Whether `account` is a registered member.
    pub fn is_member(&self, account: &AccountId) -> bool {
        self.airlines.contains_key(account)
    }

    /// Number of registered members.
    pub fn member_count(&self) -> u32 {
        self.airlines.len() as u32
    }

    /// Admit a new member. Fails if the account is already registered.
    pub fn admit(&mut self, name: &str, account: &AccountId) -> Result<(), RegistryError> {
        if self.airlines.contains_key(account) {
            return Err(RegistryError::AlreadyMember(account.to_string()));
        }
        self.airlines
            .insert(account.clone(), Airline::new(name, account.clone()));
        Ok(())
    }

    /// Explicit funding deposit from an airline.
    ///
    /// Accumulates into the fund balance; `is_funded` flips once the balance
    /// first reaches the minimum funding threshold.
    pub fn fund(&mut self, account: &AccountId, amount: Amount) -> Result<(), RegistryError> {
        let min_funding = self.min_funding;
        let airline = self.get_mut(account)?;
        airline.fund_balance = airline.fund_balance.saturating_add(amount);
        if !airline.is_funded && airline.fund_balance >= min_funding {
            airline.is_funded = true;
            tracing::info!(airline = %account, balance = %airline.fund_balance, "airline funded");
        }
        Ok(())
    }

    /// Whether the airline has met the funding threshold.
    pub fn is_funded(&self, account: &AccountId) -> bool {
        self.airlines
            .get(account)
            .map(|a| a.is_funded)
            .unwrap_or(false)
    }

    /// Credit a premium payment into the airline's fund balance.
    ///
    /// Premiums are held by the airline pending possible payout; they do not
    /// count toward the funding threshold.
    pub fn deposit_premium(
        &mut self,
        account: &AccountId,
        amount: Amount,
    ) -> Result<(), RegistryError> {
        let airline = self.get_mut(account)?;
        airline.fund_balance = airline.fund_balance.saturating_add(amount);
        Ok(())
    }

    /// Debit an insurance credit from the airline's fund balance.
    ///
    /// Not bounded by the available balance: an underfunded airline's
    /// balance clamps to zero and the shortfall is logged. Insolvency
    /// handling is a pending product decision.
    pub fn debit_fund(&mut self, account: &AccountId, amount: Amount) -> Result<(), RegistryError> {
        let airline = self.get_mut(account)?;
        match airline.fund_balance.checked_sub(amount) {
            Some(remaining) => airline.fund_balance = remaining,
            None => {
                tracing::warn!(
                    airline = %account,
                    balance = %airline.fund_balance,
                    debit = %amount,
                    "fund debit exceeds tracked balance, clamping to zero"
                );
                airline.fund_balance = Amount::ZERO;
            }
        }
        Ok(())
    }

    /// Current fund balance of a member airline.
    pub fn fund_balance(&self, account: &AccountId) -> Option<Amount> {
        self.airlines.get(account).map(|a| a.fund_balance)
    }

    /// Look up a member record.
    pub fn get(&self, account: &AccountId) -> Option<&Airline> {
        self.airlines.get(account)
    }

    fn get_mut(&mut self, account: &AccountId) -> Result<&mut Airline, RegistryError> {
        self.airlines
            .get_mut(account)
            .ok_or_else(|| RegistryError::UnknownAirline(account.to_string()))
    }
}
