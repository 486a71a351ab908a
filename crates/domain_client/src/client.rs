//! Client aggregate
//!
//! A client is either a natural person or a company; the distinction is a
//! tagged union rather than a class hierarchy, so every variant-specific
//! rule is dispatched with an exhaustive `match`. Birth date and company
//! identifier are fixed at construction; only name and contact details can
//! change afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClientId, CompanyIdentifier, CoreError, Email, PhoneNumber};

use crate::contract::Contract;

const MAX_NAME_LENGTH: usize = 255;
const MAX_AGE_YEARS: u32 = 150;
const MAJORITY_AGE: u32 = 18;

/// Variant-specific client data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientKind {
    /// A natural person with a birth date
    Person { birth_date: NaiveDate },
    /// A legal entity with a Swiss company identifier
    Company { identifier: CompanyIdentifier },
}

/// Discriminant of [`ClientKind`], used for persistence and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Person,
    Company,
}

impl ClientType {
    pub fn code(&self) -> &'static str {
        match self {
            ClientType::Person => "PERSON",
            ClientType::Company => "COMPANY",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A client of the company, person or corporate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: Email,
    pub phone: PhoneNumber,
    pub kind: ClientKind,
    pub contracts: Vec<Contract>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Creates a person client
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank or overlong name, a
    /// birth date in the future, or an implied age over 150 years.
    pub fn person(
        name: impl Into<String>,
        email: Email,
        phone: PhoneNumber,
        birth_date: NaiveDate,
    ) -> Result<Self, CoreError> {
        let name = Self::validate_name(name.into())?;
        Self::validate_birth_date(birth_date)?;
        Ok(Self::build(name, email, phone, ClientKind::Person { birth_date }))
    }

    /// Creates a company client
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank or overlong name.
    pub fn company(
        name: impl Into<String>,
        email: Email,
        phone: PhoneNumber,
        identifier: CompanyIdentifier,
    ) -> Result<Self, CoreError> {
        let name = Self::validate_name(name.into())?;
        Ok(Self::build(name, email, phone, ClientKind::Company { identifier }))
    }

    fn build(name: String, email: Email, phone: PhoneNumber, kind: ClientKind) -> Self {
        let now = Utc::now();
        Self {
            id: ClientId::new_v7(),
            name,
            email,
            phone,
            kind,
            contracts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn validate_name(name: String) -> Result<String, CoreError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::validation("Name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(CoreError::validation(format!(
                "Name cannot exceed {MAX_NAME_LENGTH} characters"
            )));
        }
        Ok(trimmed.to_string())
    }

    fn validate_birth_date(birth_date: NaiveDate) -> Result<(), CoreError> {
        let today = Utc::now().date_naive();
        if birth_date > today {
            return Err(CoreError::validation("Birth date cannot be in the future"));
        }
        match today.years_since(birth_date) {
            Some(age) if age > MAX_AGE_YEARS => Err(CoreError::validation(format!(
                "Age cannot exceed {MAX_AGE_YEARS} years"
            ))),
            _ => Ok(()),
        }
    }

    /// Returns the variant tag
    pub fn client_type(&self) -> ClientType {
        match self.kind {
            ClientKind::Person { .. } => ClientType::Person,
            ClientKind::Company { .. } => ClientType::Company,
        }
    }

    /// Human-readable one-line description
    pub fn display_info(&self) -> String {
        match &self.kind {
            ClientKind::Person { birth_date } => {
                format!("Person: {} (born {birth_date})", self.name)
            }
            ClientKind::Company { identifier } => {
                format!("Company: {} ({identifier})", self.name)
            }
        }
    }

    /// Age in whole years, for person clients
    pub fn age(&self) -> Option<u32> {
        match self.kind {
            ClientKind::Person { birth_date } => Utc::now().date_naive().years_since(birth_date),
            ClientKind::Company { .. } => None,
        }
    }

    /// True when a person client is 18 or older; companies have no age
    pub fn is_major(&self) -> Option<bool> {
        self.age().map(|age| age >= MAJORITY_AGE)
    }

    /// Re-validates and replaces the name and contact details
    ///
    /// Returns the refreshed `updated_at` timestamp so callers observe
    /// the side effect explicitly.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank or overlong name; the
    /// client is left untouched on error.
    pub fn update_info(
        &mut self,
        name: impl Into<String>,
        email: Email,
        phone: PhoneNumber,
    ) -> Result<DateTime<Utc>, CoreError> {
        let name = Self::validate_name(name.into())?;
        self.name = name;
        self.email = email;
        self.phone = phone;
        self.updated_at = Utc::now();
        Ok(self.updated_at)
    }

    /// Attaches a contract, preserving insertion order
    ///
    /// A contract whose id is already present is ignored.
    pub fn add_contract(&mut self, contract: Contract) {
        if self.contracts.iter().any(|c| c.id == contract.id) {
            return;
        }
        self.contracts.push(contract);
    }

    /// True when at least one owned contract is active
    pub fn is_active(&self) -> bool {
        self.contracts.iter().any(Contract::is_active)
    }

    /// Owned contracts that are currently active, in insertion order
    pub fn active_contracts(&self) -> Vec<&Contract> {
        self.contracts.iter().filter(|c| c.is_active()).collect()
    }

    /// Terminates every still-active owned contract effective today
    ///
    /// Refreshes `updated_at` once and returns it, whether or not any
    /// contract was actually active.
    pub fn terminate_all_contracts(&mut self) -> DateTime<Utc> {
        for contract in &mut self.contracts {
            if contract.is_active() {
                contract.terminate();
            }
        }
        self.updated_at = Utc::now();
        self.updated_at
    }
}
