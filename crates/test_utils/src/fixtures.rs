//! Pre-built test fixtures
//!
//! Ready-to-use value objects for unit and integration tests. Fixtures
//! panic on invalid input, which is acceptable in test code where the
//! inputs are literals.

use chrono::NaiveDate;
use core_kernel::{CompanyIdentifier, Currency, Email, Money, PhoneNumber};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard CHF amount
    pub fn chf_100() -> Money {
        Money::chf(dec!(100.00)).expect("valid amount")
    }

    /// A CHF amount with a fractional part
    pub fn chf_150_50() -> Money {
        Money::chf(dec!(150.50)).expect("valid amount")
    }

    /// A zero CHF amount
    pub fn chf_zero() -> Money {
        Money::zero(Currency::CHF)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR).expect("valid amount")
    }
}

/// Fixture for contact value objects
pub struct ContactFixtures;

impl ContactFixtures {
    /// A normalized email address
    pub fn email() -> Email {
        Email::new("jean.dupont@example.com").expect("valid email")
    }

    /// An email address distinct from [`ContactFixtures::email`]
    pub fn other_email() -> Email {
        Email::new("luca.bernasconi@example.com").expect("valid email")
    }

    /// A Swiss mobile number
    pub fn phone() -> PhoneNumber {
        PhoneNumber::new("+41 79 123 45 67").expect("valid phone number")
    }

    /// A Swiss UID company identifier
    pub fn company_identifier() -> CompanyIdentifier {
        CompanyIdentifier::new("CHE-123.456.789").expect("valid identifier")
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Birth date of an adult (May 20, 1990)
    pub fn adult_birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 5, 20).expect("valid date")
    }

    /// A contract start date well in the past (Jan 15, 2023)
    pub fn past_start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 15).expect("valid date")
    }

    /// An end date far in the future (Dec 31, 2099)
    pub fn far_future_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2099, 12, 31).expect("valid date")
    }
}
