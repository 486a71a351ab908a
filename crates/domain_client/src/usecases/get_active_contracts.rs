//! Active contract queries

use std::sync::Arc;

use chrono::{DateTime, Utc};

use core_kernel::{ClientId, Page, PageRequest};

use crate::contract::Contract;
use crate::error::ClientError;
use crate::ports::{ClientRepository, ContractRepository};

/// Pages through a client's active contracts
pub struct GetActiveContractsUseCase {
    clients: Arc<dyn ClientRepository>,
    contracts: Arc<dyn ContractRepository>,
}

impl GetActiveContractsUseCase {
    pub fn new(clients: Arc<dyn ClientRepository>, contracts: Arc<dyn ContractRepository>) -> Self {
        Self { clients, contracts }
    }

    /// Active contracts of the client, optionally restricted to those
    /// modified after `updated_since`
    pub async fn execute(
        &self,
        client_id: ClientId,
        page: PageRequest,
        updated_since: Option<DateTime<Utc>>,
    ) -> Result<Page<Contract>, ClientError> {
        if self.clients.find_by_id(client_id).await?.is_none() {
            return Err(ClientError::ClientNotFound(client_id));
        }
        Ok(self
            .contracts
            .find_active_for_client(client_id, page, updated_since)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;
    use crate::ports::mock::MockRepository;
    use chrono::NaiveDate;
    use core_kernel::{Currency, Email, Money, PhoneNumber};
    use rust_decimal_macros::dec;

    async fn setup() -> (GetActiveContractsUseCase, Arc<MockRepository>, ClientId) {
        let client = Client::person(
            "Jean",
            Email::new("jean@example.com").unwrap(),
            PhoneNumber::new("+41791234567").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        )
        .unwrap();
        let id = client.id;
        let repo = Arc::new(MockRepository::with_clients(vec![client]).await);
        (
            GetActiveContractsUseCase::new(repo.clone(), repo.clone()),
            repo,
            id,
        )
    }

    #[tokio::test]
    async fn test_returns_only_active_contracts() {
        let (usecase, repo, client_id) = setup().await;
        let active = Contract::new(client_id, Money::new(dec!(100), Currency::CHF).unwrap());
        let mut ended = Contract::new(client_id, Money::new(dec!(200), Currency::CHF).unwrap());
        ended.terminate();
        ContractRepository::save(repo.as_ref(), &active).await.unwrap();
        ContractRepository::save(repo.as_ref(), &ended).await.unwrap();

        let page = usecase
            .execute(client_id, PageRequest::default(), None)
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, active.id);
    }

    #[tokio::test]
    async fn test_unknown_client_is_not_found() {
        let (usecase, _, _) = setup().await;
        let result = usecase
            .execute(ClientId::new_v7(), PageRequest::default(), None)
            .await;
        assert!(matches!(result, Err(ClientError::ClientNotFound(_))));
    }

    #[tokio::test]
    async fn test_updated_since_filters() {
        let (usecase, repo, client_id) = setup().await;
        let contract = Contract::new(client_id, Money::new(dec!(100), Currency::CHF).unwrap());
        ContractRepository::save(repo.as_ref(), &contract).await.unwrap();

        let since = Utc::now() + chrono::Duration::minutes(5);
        let page = usecase
            .execute(client_id, PageRequest::default(), Some(since))
            .await
            .unwrap();
        assert!(page.items.is_empty());
    }
}
