//! Contract cost updates

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info};

use core_kernel::{ContractId, Currency, Money};

use crate::contract::Contract;
use crate::error::ClientError;
use crate::ports::ContractRepository;

/// Replaces the cost of a contract
///
/// Setting the cost to its current value is a no-op and skips the write,
/// so repeated identical updates leave `updated_at` untouched.
pub struct UpdateContractCostUseCase {
    contracts: Arc<dyn ContractRepository>,
}

impl UpdateContractCostUseCase {
    pub fn new(contracts: Arc<dyn ContractRepository>) -> Self {
        Self { contracts }
    }

    pub async fn execute(
        &self,
        id: ContractId,
        amount: Decimal,
        currency: Option<Currency>,
    ) -> Result<Contract, ClientError> {
        let mut contract = self
            .contracts
            .find_by_id(id)
            .await?
            .ok_or(ClientError::ContractNotFound(id))?;

        let new_cost = Money::new(amount, currency.unwrap_or_default())?;
        match contract.update_cost(new_cost) {
            Some(_) => {
                self.contracts.save(&contract).await?;
                info!(contract_id = %id, cost = %contract.cost, "contract cost updated");
            }
            None => debug!(contract_id = %id, "contract cost unchanged"),
        }
        Ok(contract)
    }
}
