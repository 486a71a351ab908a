//! Client lookups

use std::sync::Arc;

use core_kernel::{ClientId, Page, PageRequest};

use crate::client::Client;
use crate::error::ClientError;
use crate::ports::ClientRepository;

/// Reads clients by id or in pages
pub struct GetClientUseCase {
    clients: Arc<dyn ClientRepository>,
}

impl GetClientUseCase {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    /// Loads a client without its contracts
    pub async fn by_id(&self, id: ClientId) -> Result<Client, ClientError> {
        self.clients
            .find_by_id(id)
            .await?
            .ok_or(ClientError::ClientNotFound(id))
    }

    /// Loads a client with its contracts attached
    pub async fn by_id_with_contracts(&self, id: ClientId) -> Result<Client, ClientError> {
        self.clients
            .find_by_id_with_contracts(id)
            .await?
            .ok_or(ClientError::ClientNotFound(id))
    }

    /// Returns a page of clients in creation order
    pub async fn page(&self, page: PageRequest) -> Result<Page<Client>, ClientError> {
        Ok(self.clients.find_all(page).await?)
    }

    /// Returns a page of clients with contracts attached
    pub async fn page_with_contracts(
        &self,
        page: PageRequest,
    ) -> Result<Page<Client>, ClientError> {
        Ok(self.clients.find_all_with_contracts(page).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockRepository;
    use chrono::NaiveDate;
    use core_kernel::{Email, PhoneNumber};

    fn person(email: &str) -> Client {
        Client::person(
            "Jean",
            Email::new(email).unwrap(),
            PhoneNumber::new("+41791234567").unwrap(),
            NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_by_id_miss_is_not_found() {
        let repo = Arc::new(MockRepository::new());
        let usecase = GetClientUseCase::new(repo);
        let result = usecase.by_id(ClientId::new_v7()).await;
        assert!(matches!(result, Err(ClientError::ClientNotFound(_))));
    }

    #[tokio::test]
    async fn test_by_id_returns_saved_client() {
        let client = person("jean@example.com");
        let id = client.id;
        let repo = Arc::new(MockRepository::with_clients(vec![client]).await);
        let usecase = GetClientUseCase::new(repo);

        let found = usecase.by_id(id).await.unwrap();
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn test_page_with_contracts_attaches_them() {
        let client = person("jean@example.com");
        let id = client.id;
        let repo = Arc::new(MockRepository::with_clients(vec![client]).await);
        {
            use crate::ports::ContractRepository;
            use core_kernel::{Currency, Money};
            use rust_decimal_macros::dec;

            let contract = crate::Contract::new(
                id,
                Money::new(dec!(100), Currency::CHF).unwrap(),
            );
            ContractRepository::save(repo.as_ref(), &contract)
                .await
                .unwrap();
        }
        let usecase = GetClientUseCase::new(repo);

        let page = usecase.page_with_contracts(PageRequest::default()).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].contracts.len(), 1);
    }

    #[tokio::test]
    async fn test_page_returns_all_clients() {
        let repo = Arc::new(
            MockRepository::with_clients(vec![
                person("a@example.com"),
                person("b@example.com"),
            ])
            .await,
        );
        let usecase = GetClientUseCase::new(repo);

        let page = usecase.page(PageRequest::default()).await.unwrap();
        assert_eq!(page.total_elements, 2);
    }
}
