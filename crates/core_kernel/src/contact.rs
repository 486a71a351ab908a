//! Contact value objects
//!
//! Self-validating, immutable representations of an email address and an
//! E.164 phone number. Both normalize their input on construction; an
//! invalid input never produces an observable instance.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9+_.-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());

static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Value object for an email address
///
/// The canonical form is trimmed and lowercased; equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validates and normalizes an email address
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for empty input, a malformed
    /// address or one longer than 255 characters.
    pub fn new(value: &str) -> Result<Self, CoreError> {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CoreError::validation("Email cannot be empty"));
        }
        if normalized.chars().count() > 255 {
            return Err(CoreError::validation("Email cannot exceed 255 characters"));
        }
        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(CoreError::validation(format!(
                "Invalid email format: {value}"
            )));
        }
        Ok(Self(normalized))
    }

    /// Returns the canonical value
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the part after the '@' sign
    pub fn domain(&self) -> &str {
        // The pattern guarantees exactly the structure local@domain.
        self.0.split_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value object for a phone number in E.164 format
///
/// Input is normalized by stripping spaces, dashes and parentheses and
/// prefixing `+` when absent. The canonical form is `+` followed by up to
/// 15 digits with a non-zero leading digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates and normalizes a phone number
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for empty or malformed input.
    pub fn new(value: &str) -> Result<Self, CoreError> {
        if value.trim().is_empty() {
            return Err(CoreError::validation("Phone number cannot be empty"));
        }
        let normalized = Self::normalize(value);
        if !E164_REGEX.is_match(&normalized) {
            return Err(CoreError::validation(format!(
                "Invalid phone number format, expected E.164 (e.g. +41791234567): {value}"
            )));
        }
        Ok(Self(normalized))
    }

    fn normalize(value: &str) -> String {
        let cleaned: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
            .collect();
        if cleaned.starts_with('+') {
            cleaned
        } else {
            format!("+{cleaned}")
        }
    }

    /// Returns the canonical E.164 value
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns up to the first 3 digits after the '+'
    pub fn country_code(&self) -> &str {
        let digits = &self.0[1..];
        &digits[..digits.len().min(3)]
    }

    /// Display-only grouping: country prefix then digit blocks of 3
    pub fn format(&self) -> String {
        if self.0.len() <= 3 {
            return self.0.clone();
        }
        let (prefix, rest) = self.0.split_at(3);
        let grouped = rest
            .as_bytes()
            .chunks(3)
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{prefix} {grouped}")
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
