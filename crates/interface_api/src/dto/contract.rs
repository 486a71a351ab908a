//! Contract DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{Currency, Money};
use domain_client::Contract;

use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    pub cost_amount: Decimal,
    /// ISO 4217 code; defaults to CHF
    pub cost_currency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContractCostRequest {
    pub cost_amount: Decimal,
    pub cost_currency: Option<String>,
}

/// Query parameters for contract creation
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientIdParam {
    pub client_id: Uuid,
}

/// Query parameters for the active-contract listing
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveContractParams {
    pub client_id: Uuid,
    pub updated_since: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub cost_amount: Decimal,
    pub cost_currency: String,
    pub active: bool,
    pub duration_in_days: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Contract> for ContractResponse {
    fn from(contract: &Contract) -> Self {
        Self {
            id: Uuid::from(contract.id),
            client_id: Uuid::from(contract.client_id),
            start_date: contract.start_date,
            end_date: contract.end_date,
            cost_amount: contract.cost.amount(),
            cost_currency: contract.cost.currency().code().to_string(),
            active: contract.is_active(),
            duration_in_days: contract.duration_in_days(),
            created_at: contract.created_at,
            updated_at: contract.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCostResponse {
    pub amount: Decimal,
    pub currency: String,
}

impl From<Money> for TotalCostResponse {
    fn from(total: Money) -> Self {
        Self {
            amount: total.amount(),
            currency: total.currency().code().to_string(),
        }
    }
}

/// Parses an optional ISO 4217 code
pub fn parse_currency(code: Option<&str>) -> Result<Option<Currency>, ApiError> {
    match code {
        None => Ok(None),
        Some(code) => Currency::from_code(code)
            .map(Some)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown currency code: {code}"))),
    }
}
