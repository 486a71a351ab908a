//! Contract cost aggregation
//!
//! Stateless domain service summing contract costs in a single currency.
//! The reference currency is taken from the first contract; mixing
//! currencies is a domain error, not a conversion trigger.

use core_kernel::{Currency, Money, MoneyError};

use crate::contract::Contract;

/// Sums contract costs, refusing mixed currencies
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractCostCalculator;

impl ContractCostCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Total cost of the given contracts
    ///
    /// An empty slice yields zero francs. Otherwise the first contract
    /// fixes the currency and every other contract must match it.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` when any contract carries a
    /// different currency than the first one.
    pub fn calculate_total_cost(&self, contracts: &[Contract]) -> Result<Money, MoneyError> {
        let mut iter = contracts.iter();
        let first = match iter.next() {
            None => return Ok(Money::zero(Currency::CHF)),
            Some(contract) => contract,
        };
        let mut total = first.cost;
        for contract in iter {
            total = total.add(&contract.cost)?;
        }
        Ok(total)
    }
}
