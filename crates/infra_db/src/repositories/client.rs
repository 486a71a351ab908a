//! Client repository adapter

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{
    ClientId, CompanyIdentifier, DomainPort, Email, Page, PageRequest, PortError,
};
use domain_client::{Client, ClientKind, ClientRepository, Contract};

use crate::error::to_port_error;
use crate::repositories::{ClientRow, ContractRow};

const SELECT_CLIENT: &str = "SELECT id, client_type, name, email, phone, birth_date, \
     company_identifier, created_at, updated_at FROM clients";

/// PostgreSQL implementation of [`ClientRepository`]
#[derive(Debug, Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn contracts_for(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Contract>>, PortError> {
        let rows = sqlx::query_as::<_, ContractRow>(
            "SELECT id, client_id, start_date, end_date, cost_amount, cost_currency, \
             created_at, updated_at FROM contracts WHERE client_id = ANY($1) \
             ORDER BY created_at, id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(to_port_error)?;

        let mut by_client: HashMap<Uuid, Vec<Contract>> = HashMap::new();
        for row in rows {
            let client_id = row.client_id;
            by_client
                .entry(client_id)
                .or_default()
                .push(row.into_domain()?);
        }
        Ok(by_client)
    }

    async fn count(&self) -> Result<u64, PortError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await
            .map_err(to_port_error)?;
        Ok(total as u64)
    }

    async fn page_rows(&self, page: PageRequest) -> Result<Vec<Client>, PortError> {
        let rows = sqlx::query_as::<_, ClientRow>(&format!(
            "{SELECT_CLIENT} ORDER BY created_at, id LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page.size))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(to_port_error)?;
        rows.into_iter().map(ClientRow::into_domain).collect()
    }
}

impl DomainPort for PgClientRepository {}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError> {
        let row = sqlx::query_as::<_, ClientRow>(&format!("{SELECT_CLIENT} WHERE id = $1"))
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(to_port_error)?;
        row.map(ClientRow::into_domain).transpose()
    }

    async fn find_by_id_with_contracts(&self, id: ClientId) -> Result<Option<Client>, PortError> {
        let Some(mut client) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let mut by_client = self.contracts_for(&[Uuid::from(id)]).await?;
        client.contracts = by_client.remove(&Uuid::from(id)).unwrap_or_default();
        Ok(Some(client))
    }

    async fn find_all(&self, page: PageRequest) -> Result<Page<Client>, PortError> {
        let items = self.page_rows(page).await?;
        let total = self.count().await?;
        Ok(Page::new(items, page, total))
    }

    async fn find_all_with_contracts(&self, page: PageRequest) -> Result<Page<Client>, PortError> {
        let mut items = self.page_rows(page).await?;
        let ids: Vec<Uuid> = items.iter().map(|c| Uuid::from(c.id)).collect();
        let mut by_client = self.contracts_for(&ids).await?;
        for client in &mut items {
            client.contracts = by_client.remove(&Uuid::from(client.id)).unwrap_or_default();
        }
        let total = self.count().await?;
        Ok(Page::new(items, page, total))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Client>, PortError> {
        let row = sqlx::query_as::<_, ClientRow>(&format!("{SELECT_CLIENT} WHERE email = $1"))
            .bind(email.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(to_port_error)?;
        row.map(ClientRow::into_domain).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, PortError> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM clients WHERE email = $1)")
            .bind(email.value())
            .fetch_one(&self.pool)
            .await
            .map_err(to_port_error)
    }

    async fn exists_by_company_identifier(
        &self,
        identifier: &CompanyIdentifier,
    ) -> Result<bool, PortError> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM clients WHERE company_identifier = $1)")
            .bind(identifier.value())
            .fetch_one(&self.pool)
            .await
            .map_err(to_port_error)
    }

    async fn save(&self, client: &Client) -> Result<(), PortError> {
        let (birth_date, company_identifier) = match &client.kind {
            ClientKind::Person { birth_date } => (Some(*birth_date), None),
            ClientKind::Company { identifier } => (None, Some(identifier.value())),
        };

        sqlx::query(
            "INSERT INTO clients \
             (id, client_type, name, email, phone, birth_date, company_identifier, \
              created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 email = EXCLUDED.email, \
                 phone = EXCLUDED.phone, \
                 updated_at = EXCLUDED.updated_at",
        )
        .bind(Uuid::from(client.id))
        .bind(client.client_type().code())
        .bind(&client.name)
        .bind(client.email.value())
        .bind(client.phone.value())
        .bind(birth_date)
        .bind(company_identifier)
        .bind(client.created_at)
        .bind(client.updated_at)
        .execute(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(())
    }

    async fn delete_by_id(&self, id: ClientId) -> Result<bool, PortError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(to_port_error)?;
        Ok(result.rows_affected() > 0)
    }
}
