//! Client Domain Ports
//!
//! Port interfaces for the client domain, enabling swappable adapters:
//! a PostgreSQL implementation lives in `infra_db`, and an in-memory mock
//! is available here for tests and for wiring the HTTP layer without a
//! database.
//!
//! Lookups return `Ok(None)` on a miss; `PortError` is reserved for
//! storage failures and uniqueness conflicts. `ClientRepository::save`
//! persists the client record only; contracts are persisted through
//! `ContractRepository` and attached by the `_with_contracts` reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{
    ClientId, CompanyIdentifier, ContractId, DomainPort, Email, Page, PageRequest, PortError,
};

use crate::client::Client;
use crate::contract::Contract;

/// Port for storing and querying clients
#[async_trait]
pub trait ClientRepository: DomainPort {
    /// Finds a client by id, without its contracts
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError>;

    /// Finds a client by id with all its contracts attached, in creation
    /// order
    async fn find_by_id_with_contracts(&self, id: ClientId) -> Result<Option<Client>, PortError>;

    /// Returns a page of clients ordered by creation time, without
    /// contracts
    async fn find_all(&self, page: PageRequest) -> Result<Page<Client>, PortError>;

    /// Returns a page of clients with their contracts attached
    async fn find_all_with_contracts(&self, page: PageRequest) -> Result<Page<Client>, PortError>;

    /// Finds a client by its canonical email
    async fn find_by_email(&self, email: &Email) -> Result<Option<Client>, PortError>;

    /// True when a client with this email exists
    async fn exists_by_email(&self, email: &Email) -> Result<bool, PortError>;

    /// True when a company client with this identifier exists
    async fn exists_by_company_identifier(
        &self,
        identifier: &CompanyIdentifier,
    ) -> Result<bool, PortError>;

    /// Inserts or updates the client record
    ///
    /// A uniqueness violation on email or company identifier surfaces as
    /// `PortError::Conflict` with the offending field named.
    async fn save(&self, client: &Client) -> Result<(), PortError>;

    /// Removes the client record; returns whether anything was removed
    ///
    /// Contracts owned by the client are removed with it.
    async fn delete_by_id(&self, id: ClientId) -> Result<bool, PortError>;
}

/// Port for storing and querying contracts
#[async_trait]
pub trait ContractRepository: DomainPort {
    /// Inserts or updates the contract record
    async fn save(&self, contract: &Contract) -> Result<(), PortError>;

    /// Finds a contract by id
    async fn find_by_id(&self, id: ContractId) -> Result<Option<Contract>, PortError>;

    /// Returns a page of the client's active contracts in creation order
    ///
    /// When `updated_since` is given, only contracts modified strictly
    /// after that instant are returned.
    async fn find_active_for_client(
        &self,
        client_id: ClientId,
        page: PageRequest,
        updated_since: Option<DateTime<Utc>>,
    ) -> Result<Page<Contract>, PortError>;

    /// Returns every active contract of the client in creation order
    async fn find_all_active_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Contract>, PortError>;

    /// Returns a page of all the client's contracts, active or not
    async fn find_all_for_client(
        &self,
        client_id: ClientId,
        page: PageRequest,
    ) -> Result<Page<Contract>, PortError>;
}

/// In-memory adapter implementing both repository ports
///
/// Mirrors the storage-level uniqueness rules of the real adapter so
/// conflict handling can be exercised without a database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    use crate::client::ClientKind;

    /// In-memory store behind both [`ClientRepository`] and
    /// [`ContractRepository`]
    #[derive(Debug, Default)]
    pub struct MockRepository {
        clients: RwLock<HashMap<ClientId, Client>>,
        contracts: RwLock<Vec<Contract>>,
    }

    impl MockRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store for tests
        ///
        /// Contracts carried by the given clients are stored through the
        /// contract side, as the real adapters would.
        pub async fn with_clients(clients: Vec<Client>) -> Self {
            let store = Self::new();
            for mut client in clients {
                let contracts = std::mem::take(&mut client.contracts);
                store.clients.write().await.insert(client.id, client);
                store.contracts.write().await.extend(contracts);
            }
            store
        }

        fn identifier_of(client: &Client) -> Option<&CompanyIdentifier> {
            match &client.kind {
                ClientKind::Company { identifier } => Some(identifier),
                ClientKind::Person { .. } => None,
            }
        }

        async fn contracts_of(&self, client_id: ClientId) -> Vec<Contract> {
            self.contracts
                .read()
                .await
                .iter()
                .filter(|c| c.client_id == client_id)
                .cloned()
                .collect()
        }

        fn paginate<T: Clone>(items: &[T], page: PageRequest) -> Page<T> {
            let total = items.len() as u64;
            let selected = items
                .iter()
                .skip(page.offset() as usize)
                .take(page.size as usize)
                .cloned()
                .collect();
            Page::new(selected, page, total)
        }
    }

    impl DomainPort for MockRepository {}

    #[async_trait]
    impl ClientRepository for MockRepository {
        async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError> {
            Ok(self.clients.read().await.get(&id).cloned())
        }

        async fn find_by_id_with_contracts(
            &self,
            id: ClientId,
        ) -> Result<Option<Client>, PortError> {
            let Some(mut client) = self.clients.read().await.get(&id).cloned() else {
                return Ok(None);
            };
            client.contracts = self.contracts_of(id).await;
            Ok(Some(client))
        }

        async fn find_all(&self, page: PageRequest) -> Result<Page<Client>, PortError> {
            let clients = self.clients.read().await;
            let mut all: Vec<Client> = clients.values().cloned().collect();
            all.sort_by_key(|c| c.created_at);
            Ok(Self::paginate(&all, page))
        }

        async fn find_all_with_contracts(
            &self,
            page: PageRequest,
        ) -> Result<Page<Client>, PortError> {
            let mut result = self.find_all(page).await?;
            for client in &mut result.items {
                client.contracts = self.contracts_of(client.id).await;
            }
            Ok(result)
        }

        async fn find_by_email(&self, email: &Email) -> Result<Option<Client>, PortError> {
            Ok(self
                .clients
                .read()
                .await
                .values()
                .find(|c| &c.email == email)
                .cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> Result<bool, PortError> {
            Ok(self.clients.read().await.values().any(|c| &c.email == email))
        }

        async fn exists_by_company_identifier(
            &self,
            identifier: &CompanyIdentifier,
        ) -> Result<bool, PortError> {
            Ok(self
                .clients
                .read()
                .await
                .values()
                .any(|c| Self::identifier_of(c) == Some(identifier)))
        }

        async fn save(&self, client: &Client) -> Result<(), PortError> {
            let mut clients = self.clients.write().await;
            let email_taken = clients
                .values()
                .any(|c| c.id != client.id && c.email == client.email);
            if email_taken {
                return Err(PortError::conflict_on(
                    format!("email {} already exists", client.email),
                    "email",
                ));
            }
            if let Some(identifier) = Self::identifier_of(client) {
                let identifier_taken = clients
                    .values()
                    .any(|c| c.id != client.id && Self::identifier_of(c) == Some(identifier));
                if identifier_taken {
                    return Err(PortError::conflict_on(
                        format!("company identifier {identifier} already exists"),
                        "company_identifier",
                    ));
                }
            }
            let mut record = client.clone();
            record.contracts.clear();
            clients.insert(record.id, record);
            Ok(())
        }

        async fn delete_by_id(&self, id: ClientId) -> Result<bool, PortError> {
            let removed = self.clients.write().await.remove(&id).is_some();
            if removed {
                self.contracts.write().await.retain(|c| c.client_id != id);
            }
            Ok(removed)
        }
    }

    #[async_trait]
    impl ContractRepository for MockRepository {
        async fn save(&self, contract: &Contract) -> Result<(), PortError> {
            let mut contracts = self.contracts.write().await;
            match contracts.iter_mut().find(|c| c.id == contract.id) {
                Some(existing) => *existing = contract.clone(),
                None => contracts.push(contract.clone()),
            }
            Ok(())
        }

        async fn find_by_id(&self, id: ContractId) -> Result<Option<Contract>, PortError> {
            Ok(self
                .contracts
                .read()
                .await
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }

        async fn find_active_for_client(
            &self,
            client_id: ClientId,
            page: PageRequest,
            updated_since: Option<DateTime<Utc>>,
        ) -> Result<Page<Contract>, PortError> {
            let matching: Vec<Contract> = self
                .contracts
                .read()
                .await
                .iter()
                .filter(|c| c.client_id == client_id && c.is_active())
                .filter(|c| updated_since.map_or(true, |since| c.updated_at > since))
                .cloned()
                .collect();
            Ok(Self::paginate(&matching, page))
        }

        async fn find_all_active_for_client(
            &self,
            client_id: ClientId,
        ) -> Result<Vec<Contract>, PortError> {
            Ok(self
                .contracts
                .read()
                .await
                .iter()
                .filter(|c| c.client_id == client_id && c.is_active())
                .cloned()
                .collect())
        }

        async fn find_all_for_client(
            &self,
            client_id: ClientId,
            page: PageRequest,
        ) -> Result<Page<Contract>, PortError> {
            let matching = self.contracts_of(client_id).await;
            Ok(Self::paginate(&matching, page))
        }
    }
}
