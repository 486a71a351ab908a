//! Active cost aggregation

use std::sync::Arc;

use core_kernel::{ClientId, Money};

use crate::error::ClientError;
use crate::ports::{ClientRepository, ContractRepository};
use crate::service::ContractCostCalculator;

/// Sums the cost of a client's active contracts
pub struct CalculateTotalCostUseCase {
    clients: Arc<dyn ClientRepository>,
    contracts: Arc<dyn ContractRepository>,
    calculator: ContractCostCalculator,
}

impl CalculateTotalCostUseCase {
    pub fn new(clients: Arc<dyn ClientRepository>, contracts: Arc<dyn ContractRepository>) -> Self {
        Self {
            clients,
            contracts,
            calculator: ContractCostCalculator::new(),
        }
    }

    pub async fn execute(&self, client_id: ClientId) -> Result<Money, ClientError> {
        if self.clients.find_by_id(client_id).await?.is_none() {
            return Err(ClientError::ClientNotFound(client_id));
        }
        let active = self.contracts.find_all_active_for_client(client_id).await?;
        Ok(self.calculator.calculate_total_cost(&active)?)
    }
}
