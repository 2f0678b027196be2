//! The marketplace — one owner for all engine state.

use crate::config::MarketplaceConfig;
use crate::error::MarketplaceError;
use skycover_consensus::{ConsensusAggregator, FinalizedOutcome};
use skycover_entropy::EntropySource;
use skycover_governance::{AdmissionOutcome, VotingEngine};
use skycover_ledger::{FlightTable, InsuranceLedger};
use skycover_oracle::OracleRegistry;
use skycover_registry::{AirlineRegistry, RegistryError};
use skycover_store::BalanceStore;
use skycover_types::{AccountId, Amount, FlightKey, FlightStatus, RequestKey, Timestamp};
use std::sync::Arc;

/// The flight-insurance marketplace engine.
///
/// State-changing calls are processed strictly sequentially through
/// `&mut self`; hosts that serve concurrent clients put their own
/// exclusive-access discipline around the instance.
pub struct Marketplace {
    config: MarketplaceConfig,
    operational: bool,
    airlines: AirlineRegistry,
    governance: VotingEngine,
    oracles: OracleRegistry,
    aggregator: ConsensusAggregator,
    flights: FlightTable,
    ledger: InsuranceLedger,
}

impl Marketplace {
    /// Create a marketplace with a founding airline already admitted.
    ///
    /// The founder seeds the registry so founder-phase admissions have a
    /// member to propose them; an empty registry could never bootstrap.
    pub fn new(
        config: MarketplaceConfig,
        entropy: Arc<dyn EntropySource>,
        balance_store: Arc<dyn BalanceStore>,
        founder_name: &str,
        founder: &AccountId,
    ) -> Self {
        let mut airlines = AirlineRegistry::new(config.min_airline_funding);
        airlines
            .admit(founder_name, founder)
            .expect("fresh registry cannot contain the founder");

        Self {
            governance: VotingEngine::new(config.founder_quota),
            oracles: OracleRegistry::new(entropy, config.oracle_registration_fee),
            aggregator: ConsensusAggregator::new(
                config.min_oracle_responses,
                config.duplicate_policy,
            ),
            flights: FlightTable::new(),
            ledger: InsuranceLedger::new(config.min_premium, balance_store),
            airlines,
            operational: true,
            config,
        }
    }

    // ── Administrative gate ──────────────────────────────────────────────

    pub fn is_operational(&self) -> bool {
        self.operational
    }

    /// Toggle the operational gate.
    ///
    /// While the gate is down every state-changing entry point fails with
    /// `NotOperational`, except this toggle and `withdraw`: funds already
    /// credited must remain retrievable.
    pub fn set_operational(&mut self, operational: bool) {
        self.operational = operational;
        tracing::info!(operational, "operational gate toggled");
    }

    fn ensure_operational(&self) -> Result<(), MarketplaceError> {
        if self.operational {
            Ok(())
        } else {
            Err(MarketplaceError::NotOperational)
        }
    }

    // ── Airlines ─────────────────────────────────────────────────────────

    /// Propose a new airline, or admit it outright during the founder phase.
    pub fn register_airline(
        &mut self,
        candidate_name: &str,
        candidate: &AccountId,
        proposer: &AccountId,
    ) -> Result<AdmissionOutcome, MarketplaceError> {
        self.ensure_operational()?;
        Ok(self
            .governance
            .propose_or_admit(&mut self.airlines, candidate_name, candidate, proposer)?)
    }

    /// Deposit airline funding toward the participation threshold.
    pub fn fund_airline(
        &mut self,
        account: &AccountId,
        amount: Amount,
    ) -> Result<(), MarketplaceError> {
        self.ensure_operational()?;
        Ok(self.airlines.fund(account, amount)?)
    }

    pub fn member_count(&self) -> u32 {
        self.airlines.member_count()
    }

    pub fn is_member(&self, account: &AccountId) -> bool {
        self.airlines.is_member(account)
    }

    pub fn airline_fund_balance(&self, account: &AccountId) -> Option<Amount> {
        self.airlines.fund_balance(account)
    }

    // ── Flights & coverage ───────────────────────────────────────────────

    /// Register a flight for coverage. Only funded member airlines may.
    pub fn register_flight(
        &mut self,
        airline: &AccountId,
        flight: &str,
        scheduled_at: Timestamp,
    ) -> Result<FlightKey, MarketplaceError> {
        self.ensure_operational()?;
        if !self.airlines.is_member(airline) {
            return Err(RegistryError::UnknownAirline(airline.to_string()).into());
        }
        if !self.airlines.is_funded(airline) {
            return Err(MarketplaceError::AirlineNotFunded(airline.to_string()));
        }
        Ok(self.flights.register(flight, airline, scheduled_at)?)
    }

    /// Buy escrow coverage against a flight.
    pub fn purchase_coverage(
        &mut self,
        buyer: &AccountId,
        airline: &AccountId,
        flight: &str,
        scheduled_at: Timestamp,
        amount: Amount,
        now: Timestamp,
    ) -> Result<(), MarketplaceError> {
        self.ensure_operational()?;
        let key = FlightKey::derive(airline, flight, scheduled_at);
        Ok(self.ledger.purchase(
            &mut self.airlines,
            &self.flights,
            buyer,
            airline,
            key,
            amount,
            now,
        )?)
    }

    /// Consensus-established status of a flight.
    pub fn flight_status(
        &self,
        airline: &AccountId,
        flight: &str,
        scheduled_at: Timestamp,
    ) -> Option<FlightStatus> {
        self.flights
            .status(&FlightKey::derive(airline, flight, scheduled_at))
    }

    // ── Oracles & consensus ──────────────────────────────────────────────

    /// Register an oracle attestor against the paid fee.
    pub fn register_oracle(
        &mut self,
        account: &AccountId,
        paid_fee: Amount,
        now: Timestamp,
    ) -> Result<[u8; 3], MarketplaceError> {
        self.ensure_operational()?;
        Ok(self.oracles.register(account, paid_fee, now)?)
    }

    /// Assigned indexes of a registered attestor.
    pub fn oracle_indexes(&self, account: &AccountId) -> Result<[u8; 3], MarketplaceError> {
        Ok(self.oracles.indexes_of(account)?)
    }

    /// Issue a status-fetch request for a flight.
    ///
    /// Opens a consensus session under a pseudo-random broadcast index and
    /// returns the index so attestors know which broadcast to answer. The
    /// host relays the request to attestor clients; delivery and retry are
    /// its concern, not the engine's.
    pub fn fetch_flight_status(
        &mut self,
        requester: &AccountId,
        airline: &AccountId,
        flight: &str,
        scheduled_at: Timestamp,
        now: Timestamp,
    ) -> Result<u8, MarketplaceError> {
        self.ensure_operational()?;
        let index = self.oracles.random_index(requester)?;
        let key = RequestKey::derive(index, airline, flight, scheduled_at);
        self.aggregator.open_session(key, requester, now);
        tracing::debug!(%key, index, flight, "status-fetch request issued");
        Ok(index)
    }

    /// Submit one attestor response toward consensus.
    ///
    /// On the finalizing response the flight status is written and, for
    /// `LateAirline` outcomes, the credit pass runs against the airline's
    /// escrow. A re-issued session for an already-settled flight finalizes
    /// without side effects: the flight status, not the session, is the
    /// finalize-once guard.
    pub fn submit_oracle_response(
        &mut self,
        attestor: &AccountId,
        index: u8,
        airline: &AccountId,
        flight: &str,
        scheduled_at: Timestamp,
        status: FlightStatus,
        now: Timestamp,
    ) -> Result<Option<FinalizedOutcome>, MarketplaceError> {
        self.ensure_operational()?;
        let assigned = self.oracles.indexes_of(attestor)?;
        let outcome = self.aggregator.submit(
            attestor,
            &assigned,
            index,
            airline,
            flight,
            scheduled_at,
            status,
        )?;

        if let Some(outcome) = &outcome {
            let applied = self
                .flights
                .apply_status(&outcome.flight_key, outcome.status, now);
            if applied && outcome.status == FlightStatus::LateAirline {
                self.ledger.credit_insurees(
                    &mut self.airlines,
                    &outcome.airline,
                    outcome.flight_key,
                    self.config.credit_percentage,
                )?;
            }
        }
        Ok(outcome)
    }

    // ── Payouts ──────────────────────────────────────────────────────────

    /// Accumulated credit balance of an account.
    pub fn credit_of(&self, account: &AccountId) -> Amount {
        self.ledger.credit_of(account)
    }

    /// Withdraw the caller's credit balance through the balance store.
    ///
    /// Deliberately not gated on `operational`.
    pub fn withdraw(&mut self, account: &AccountId) -> Result<Amount, MarketplaceError> {
        Ok(self.ledger.withdraw(account)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycover_nullables::{NullBalanceStore, NullEntropy};

    fn account(name: &str) -> AccountId {
        AccountId::new(name)
    }

    fn marketplace() -> Marketplace {
        Marketplace::new(
            MarketplaceConfig::default(),
            Arc::new(NullEntropy::constant([9u8; 32])),
            Arc::new(NullBalanceStore::new()),
            "Founder Air",
            &account("founder"),
        )
    }

    #[test]
    fn founder_is_seeded() {
        let market = marketplace();
        assert!(market.is_member(&account("founder")));
        assert_eq!(market.member_count(), 1);
    }

    #[test]
    fn gate_blocks_mutations_but_not_withdrawal() {
        let mut market = marketplace();
        market.set_operational(false);

        assert!(matches!(
            market.register_airline("Beta Air", &account("beta"), &account("founder")),
            Err(MarketplaceError::NotOperational)
        ));
        assert!(matches!(
            market.fund_airline(&account("founder"), Amount::from_units(10)),
            Err(MarketplaceError::NotOperational)
        ));
        assert!(matches!(
            market.register_oracle(&account("o1"), Amount::from_units(1), Timestamp::EPOCH),
            Err(MarketplaceError::NotOperational)
        ));

        // Withdrawal stays reachable; with no credit it fails on its own
        // terms, not on the gate.
        assert!(matches!(
            market.withdraw(&account("buyer")),
            Err(MarketplaceError::Ledger(_))
        ));

        market.set_operational(true);
        assert!(market
            .register_airline("Beta Air", &account("beta"), &account("founder"))
            .is_ok());
    }

    #[test]
    fn unfunded_airline_cannot_register_flights() {
        let mut market = marketplace();
        let err = market
            .register_flight(&account("founder"), "SC-1", Timestamp::new(1000))
            .unwrap_err();
        assert!(matches!(err, MarketplaceError::AirlineNotFunded(_)));

        market
            .fund_airline(&account("founder"), Amount::from_units(10))
            .unwrap();
        assert!(market
            .register_flight(&account("founder"), "SC-1", Timestamp::new(1000))
            .is_ok());
    }

    #[test]
    fn non_member_airline_cannot_register_flights() {
        let mut market = marketplace();
        let err = market
            .register_flight(&account("stranger"), "SC-1", Timestamp::new(1000))
            .unwrap_err();
        assert!(matches!(
            err,
            MarketplaceError::Registry(RegistryError::UnknownAirline(_))
        ));
    }
}
