//! Contract creation

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use core_kernel::{ClientId, Currency, Money};

use crate::contract::Contract;
use crate::error::ClientError;
use crate::ports::{ClientRepository, ContractRepository};

/// Input for creating a contract
#[derive(Debug, Clone)]
pub struct CreateContractCommand {
    pub cost_amount: Decimal,
    /// Defaults to CHF when absent
    pub cost_currency: Option<Currency>,
    /// Defaults to today when absent
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Creates a contract for an existing client
pub struct CreateContractUseCase {
    clients: Arc<dyn ClientRepository>,
    contracts: Arc<dyn ContractRepository>,
}

impl CreateContractUseCase {
    pub fn new(clients: Arc<dyn ClientRepository>, contracts: Arc<dyn ContractRepository>) -> Self {
        Self { clients, contracts }
    }

    pub async fn execute(
        &self,
        client_id: ClientId,
        command: CreateContractCommand,
    ) -> Result<Contract, ClientError> {
        if self.clients.find_by_id(client_id).await?.is_none() {
            return Err(ClientError::ClientNotFound(client_id));
        }

        let currency = command.cost_currency.unwrap_or_default();
        let cost = Money::new(command.cost_amount, currency)?;

        let contract = match (command.start_date, command.end_date) {
            (None, None) => Contract::new(client_id, cost),
            (start, end) => Contract::with_dates(client_id, cost, start, end)?,
        };

        self.contracts.save(&contract).await?;
        info!(contract_id = %contract.id, client_id = %client_id, "contract created");
        Ok(contract)
    }
}
