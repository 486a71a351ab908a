//! Custom test assertions
//!
//! Assertion helpers for domain types with error messages that name the
//! offending values.

use core_kernel::Money;
use domain_client::Contract;

/// Asserts that two Money values agree on both amount and currency
///
/// # Panics
///
/// Panics with both values in the message when they differ.
pub fn assert_money_eq(actual: Money, expected: Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "amount mismatch: actual={}, expected={}",
        actual.amount(),
        expected.amount()
    );
}

/// Asserts that a contract is currently active
pub fn assert_active(contract: &Contract) {
    assert!(
        contract.is_active(),
        "expected contract {} to be active, end_date={:?}",
        contract.id,
        contract.end_date
    );
}

/// Asserts that a contract is no longer active
pub fn assert_terminated(contract: &Contract) {
    assert!(
        !contract.is_active(),
        "expected contract {} to be terminated, end_date={:?}",
        contract.id,
        contract.end_date
    );
}
