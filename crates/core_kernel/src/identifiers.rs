//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers around UUIDs prevent accidental mixing of client and
//! contract identifiers. The Swiss company identifier (UID) lives here as
//! well since it is an externally assigned identity, not contact data.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(ClientId, "CLI");
define_id!(ContractId, "CTR");

static SWISS_UID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CHE-\d{3}\.\d{3}\.\d{3}$").unwrap());

/// Value object for a Swiss company identifier (UID/IDE)
///
/// Canonical format is `CHE-XXX.XXX.XXX`, uppercased and trimmed on
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyIdentifier(String);

impl CompanyIdentifier {
    /// Validates and normalizes a Swiss UID
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for empty input or anything not
    /// matching `CHE-XXX.XXX.XXX`.
    pub fn new(value: &str) -> Result<Self, CoreError> {
        if value.trim().is_empty() {
            return Err(CoreError::validation("Company identifier cannot be empty"));
        }
        let normalized = value.trim().to_uppercase();
        if !SWISS_UID_REGEX.is_match(&normalized) {
            return Err(CoreError::validation(format!(
                "Invalid company identifier format, expected CHE-XXX.XXX.XXX: {value}"
            )));
        }
        Ok(Self(normalized))
    }

    /// Returns the canonical value
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
