//! Repository adapters
//!
//! Row structs mirror the table layout; domain objects are rebuilt
//! through their validating constructors, so a corrupted row surfaces as
//! `PortError::Validation` instead of an invalid domain value.

mod client;
mod contract;

pub use client::PgClientRepository;
pub use contract::PgContractRepository;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use core_kernel::{
    ClientId, CompanyIdentifier, ContractId, CoreError, Currency, Email, Money, PhoneNumber,
    PortError,
};
use domain_client::{Client, ClientKind, Contract};

fn invalid(error: CoreError) -> PortError {
    PortError::validation(error.to_string())
}

/// A row of the `clients` table
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ClientRow {
    pub id: Uuid,
    pub client_type: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub company_identifier: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClientRow {
    pub(crate) fn into_domain(self) -> Result<Client, PortError> {
        let email = Email::new(&self.email).map_err(invalid)?;
        let phone = PhoneNumber::new(&self.phone).map_err(invalid)?;
        let kind = match self.client_type.as_str() {
            "PERSON" => {
                let birth_date = self.birth_date.ok_or_else(|| {
                    PortError::validation(format!("person {} has no birth date", self.id))
                })?;
                ClientKind::Person { birth_date }
            }
            "COMPANY" => {
                let identifier = self.company_identifier.as_deref().ok_or_else(|| {
                    PortError::validation(format!("company {} has no identifier", self.id))
                })?;
                ClientKind::Company {
                    identifier: CompanyIdentifier::new(identifier).map_err(invalid)?,
                }
            }
            other => {
                return Err(PortError::validation(format!(
                    "unknown client type: {other}"
                )))
            }
        };
        Ok(Client {
            id: ClientId::from(self.id),
            name: self.name,
            email,
            phone,
            kind,
            contracts: Vec::new(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// A row of the `contracts` table
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ContractRow {
    pub id: Uuid,
    pub client_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub cost_amount: Decimal,
    pub cost_currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContractRow {
    pub(crate) fn into_domain(self) -> Result<Contract, PortError> {
        let currency = Currency::from_code(&self.cost_currency).ok_or_else(|| {
            PortError::validation(format!("unknown currency code: {}", self.cost_currency))
        })?;
        let cost = Money::new(self.cost_amount, currency)
            .map_err(|e| PortError::validation(e.to_string()))?;
        Ok(Contract {
            id: ContractId::from(self.id),
            client_id: ClientId::from(self.client_id),
            start_date: self.start_date,
            end_date: self.end_date,
            cost,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
