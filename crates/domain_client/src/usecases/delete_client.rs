//! Client removal with contract termination

use std::sync::Arc;

use tracing::info;

use core_kernel::ClientId;

use crate::error::ClientError;
use crate::ports::{ClientRepository, ContractRepository};

/// Deletes a client after terminating its active contracts
///
/// Every still-active contract is ended effective today and persisted
/// before the client record is removed, so the contract history keeps a
/// definite end date even though the rows themselves cascade away with
/// the client.
pub struct DeleteClientUseCase {
    clients: Arc<dyn ClientRepository>,
    contracts: Arc<dyn ContractRepository>,
}

impl DeleteClientUseCase {
    pub fn new(clients: Arc<dyn ClientRepository>, contracts: Arc<dyn ContractRepository>) -> Self {
        Self { clients, contracts }
    }

    pub async fn execute(&self, id: ClientId) -> Result<(), ClientError> {
        let client = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or(ClientError::ClientNotFound(id))?;

        let active = self.contracts.find_all_active_for_client(id).await?;
        let terminated = active.len();
        for mut contract in active {
            contract.terminate();
            self.contracts.save(&contract).await?;
        }

        self.clients.delete_by_id(id).await?;
        info!(client_id = %client.id, terminated, "client deleted");
        Ok(())
    }
}
