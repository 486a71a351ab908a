//! Client DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::PageRequest;
use domain_client::{Client, ClientKind, ClientType};

use crate::dto::contract::ContractResponse;
use crate::dto::PageParams;

/// Query parameters for the client listing
///
/// `includeContracts=true` attaches each client's contracts to the page
/// items.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClientsParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub include_contracts: Option<bool>,
}

impl ListClientsParams {
    pub fn to_request(self) -> PageRequest {
        PageParams {
            page: self.page,
            size: self.size,
        }
        .to_request()
    }

    pub fn with_contracts(self) -> bool {
        self.include_contracts.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 3, max = 20, message = "must be a phone number"))]
    pub phone: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 3, max = 20, message = "must be a phone number"))]
    pub phone: String,
    #[validate(length(min = 1, message = "company identifier is required"))]
    pub company_identifier: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1 to 255 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 3, max = 20, message = "must be a phone number"))]
    pub phone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: Uuid,
    pub client_type: ClientType,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub display_info: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracts: Option<Vec<ContractResponse>>,
}

impl ClientResponse {
    pub fn from_client(client: &Client, include_contracts: bool) -> Self {
        let (birth_date, company_identifier) = match &client.kind {
            ClientKind::Person { birth_date } => (Some(*birth_date), None),
            ClientKind::Company { identifier } => (None, Some(identifier.value().to_string())),
        };
        let contracts = include_contracts
            .then(|| client.contracts.iter().map(ContractResponse::from).collect());
        Self {
            id: Uuid::from(client.id),
            client_type: client.client_type(),
            name: client.name.clone(),
            email: client.email.value().to_string(),
            phone: client.phone.value().to_string(),
            birth_date,
            company_identifier,
            age: client.age(),
            display_info: client.display_info(),
            created_at: client.created_at,
            updated_at: client.updated_at,
            contracts,
        }
    }
}
