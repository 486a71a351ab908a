//! Test data builders
//!
//! Builder patterns for constructing aggregates with sensible defaults,
//! so tests only spell out the fields they care about.

use chrono::NaiveDate;
use core_kernel::{ClientId, CompanyIdentifier, Email, Money, PhoneNumber};
use domain_client::{Client, Contract};

use crate::fixtures::{ContactFixtures, MoneyFixtures, TemporalFixtures};

/// Builder for test clients
///
/// Defaults to a person named Jean Dupont with the standard contact
/// fixtures. Calling [`ClientBuilder::as_company`] switches the variant.
pub struct ClientBuilder {
    name: String,
    email: Email,
    phone: PhoneNumber,
    birth_date: NaiveDate,
    company_identifier: Option<CompanyIdentifier>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a builder with default person values
    pub fn new() -> Self {
        Self {
            name: "Jean Dupont".to_string(),
            email: ContactFixtures::email(),
            phone: ContactFixtures::phone(),
            birth_date: TemporalFixtures::adult_birth_date(),
            company_identifier: None,
        }
    }

    /// Sets the client name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: Email) -> Self {
        self.email = email;
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the birth date of a person client
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Turns the builder into a company client with the given identifier
    pub fn as_company(mut self, identifier: CompanyIdentifier) -> Self {
        self.company_identifier = Some(identifier);
        self
    }

    /// Builds the client
    ///
    /// # Panics
    ///
    /// Panics when the configured values fail domain validation.
    pub fn build(self) -> Client {
        match self.company_identifier {
            Some(identifier) => Client::company(self.name, self.email, self.phone, identifier),
            None => Client::person(self.name, self.email, self.phone, self.birth_date),
        }
        .expect("builder values must pass domain validation")
    }
}

/// Builder for test contracts
pub struct ContractBuilder {
    client_id: ClientId,
    cost: Money,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl ContractBuilder {
    /// Creates a builder for an open-ended contract owned by `client_id`
    pub fn for_client(client_id: ClientId) -> Self {
        Self {
            client_id,
            cost: MoneyFixtures::chf_100(),
            start_date: None,
            end_date: None,
        }
    }

    /// Sets the monthly cost
    pub fn with_cost(mut self, cost: Money) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the start date
    pub fn starting(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the end date
    pub fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Gives the contract a validity window that already lies in the past
    pub fn already_ended(mut self) -> Self {
        self.start_date = Some(TemporalFixtures::past_start_date());
        self.end_date = Some(
            TemporalFixtures::past_start_date() + chrono::Duration::days(30),
        );
        self
    }

    /// Builds the contract
    ///
    /// # Panics
    ///
    /// Panics when the configured dates fail domain validation.
    pub fn build(self) -> Contract {
        match (self.start_date, self.end_date) {
            (None, None) => Contract::new(self.client_id, self.cost),
            (start, end) => Contract::with_dates(self.client_id, self.cost, start, end)
                .expect("builder dates must pass domain validation"),
        }
    }
}
