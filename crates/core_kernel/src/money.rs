//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Amounts are validated before scaling and stored at 2 decimal places,
//! rounded half-up.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency codes following ISO 4217
///
/// CHF is the system default; contracts are priced in Swiss francs unless
/// stated otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    CHF,
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CHF => "CHF",
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
        }
    }

    /// Parses an ISO 4217 code
    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "CHF" => Some(Currency::CHF),
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::CHF
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Result cannot be negative")]
    NegativeResult,
}

/// A monetary amount with associated currency
///
/// Amounts must be strictly positive and no larger than 999,999,999.99.
/// Validation happens before scaling, then the amount is rounded half-up
/// to 2 decimal places. The only zero-amount value is [`Money::zero`],
/// reserved for aggregate results such as an empty cost sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// Largest representable amount, inclusive
const MAX_AMOUNT: Decimal = dec!(999_999_999.99);

/// Decimal places for stored amounts
const SCALE: u32 = 2;

impl Money {
    /// Creates a new Money value, validating and scaling the amount
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the amount is zero, negative
    /// or exceeds the maximum allowed value.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if amount <= Decimal::ZERO {
            return Err(MoneyError::InvalidAmount(format!(
                "amount must be positive: {amount}"
            )));
        }
        if amount > MAX_AMOUNT {
            return Err(MoneyError::InvalidAmount(format!(
                "amount exceeds maximum allowed value: {amount}"
            )));
        }
        Ok(Self {
            amount: Self::scale(amount),
            currency,
        })
    }

    /// Creates a CHF amount
    pub fn chf(amount: Decimal) -> Result<Self, MoneyError> {
        Self::new(amount, Currency::CHF)
    }

    /// Creates a zero amount in the specified currency
    ///
    /// Zero is not a valid contract cost; this constructor exists for
    /// aggregate results (summing an empty contract list).
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the amount, scaled to 2 decimal places
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Adds another amount of the same currency
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.validate_currency(other)?;
        Money::new(self.amount + other.amount, self.currency)
    }

    /// Subtracts another amount of the same currency
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::NegativeResult` if the subtraction would go
    /// below zero.
    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        self.validate_currency(other)?;
        let result = self.amount - other.amount;
        if result < Decimal::ZERO {
            return Err(MoneyError::NegativeResult);
        }
        if result.is_zero() {
            return Ok(Money::zero(self.currency));
        }
        Money::new(result, self.currency)
    }

    /// Multiplies by a positive scalar factor
    pub fn multiply(&self, factor: Decimal) -> Result<Money, MoneyError> {
        if factor <= Decimal::ZERO {
            return Err(MoneyError::InvalidAmount(format!(
                "multiplier must be positive: {factor}"
            )));
        }
        Money::new(self.amount * factor, self.currency)
    }

    /// Returns true if this amount is greater than the other
    pub fn is_greater_than(&self, other: &Money) -> Result<bool, MoneyError> {
        self.validate_currency(other)?;
        Ok(self.amount > other.amount)
    }

    fn validate_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }

    /// Half-up rounding to the storage scale
    fn scale(amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency.code(), self.amount)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Scaling is idempotent: re-wrapping an already scaled amount
        // leaves it unchanged.
        #[test]
        fn money_scaling_is_idempotent(minor in 1i64..99_999_999_999i64) {
            let amount = Decimal::new(minor, 2);
            let once = Money::chf(amount).unwrap();
            let twice = Money::chf(once.amount()).unwrap();
            prop_assert_eq!(once.amount(), twice.amount());
        }

        #[test]
        fn money_addition_is_commutative(
            a in 1i64..1_000_000i64,
            b in 1i64..1_000_000i64
        ) {
            let ma = Money::chf(Decimal::new(a, 2)).unwrap();
            let mb = Money::chf(Decimal::new(b, 2)).unwrap();
            prop_assert_eq!(ma.add(&mb).unwrap(), mb.add(&ma).unwrap());
        }
    }
}
