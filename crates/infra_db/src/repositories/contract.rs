//! Contract repository adapter

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{ClientId, ContractId, DomainPort, Page, PageRequest, PortError};
use domain_client::{Contract, ContractRepository};

use crate::error::to_port_error;
use crate::repositories::ContractRow;

const SELECT_CONTRACT: &str = "SELECT id, client_id, start_date, end_date, cost_amount, \
     cost_currency, created_at, updated_at FROM contracts";

// Active means no end date or an end date still in the future, matching
// Contract::is_active.
const ACTIVE: &str = "(end_date IS NULL OR end_date > CURRENT_DATE)";

/// PostgreSQL implementation of [`ContractRepository`]
#[derive(Debug, Clone)]
pub struct PgContractRepository {
    pool: PgPool,
}

impl PgContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgContractRepository {}

#[async_trait]
impl ContractRepository for PgContractRepository {
    async fn save(&self, contract: &Contract) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO contracts \
             (id, client_id, start_date, end_date, cost_amount, cost_currency, \
              created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO UPDATE SET \
                 end_date = EXCLUDED.end_date, \
                 cost_amount = EXCLUDED.cost_amount, \
                 cost_currency = EXCLUDED.cost_currency, \
                 updated_at = EXCLUDED.updated_at",
        )
        .bind(Uuid::from(contract.id))
        .bind(Uuid::from(contract.client_id))
        .bind(contract.start_date)
        .bind(contract.end_date)
        .bind(contract.cost.amount())
        .bind(contract.cost.currency().code())
        .bind(contract.created_at)
        .bind(contract.updated_at)
        .execute(&self.pool)
        .await
        .map_err(to_port_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: ContractId) -> Result<Option<Contract>, PortError> {
        let row = sqlx::query_as::<_, ContractRow>(&format!("{SELECT_CONTRACT} WHERE id = $1"))
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(to_port_error)?;
        row.map(ContractRow::into_domain).transpose()
    }

    async fn find_active_for_client(
        &self,
        client_id: ClientId,
        page: PageRequest,
        updated_since: Option<DateTime<Utc>>,
    ) -> Result<Page<Contract>, PortError> {
        let rows = sqlx::query_as::<_, ContractRow>(&format!(
            "{SELECT_CONTRACT} WHERE client_id = $1 AND {ACTIVE} \
             AND ($2::timestamptz IS NULL OR updated_at > $2) \
             ORDER BY created_at, id LIMIT $3 OFFSET $4"
        ))
        .bind(Uuid::from(client_id))
        .bind(updated_since)
        .bind(i64::from(page.size))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(to_port_error)?;

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM contracts WHERE client_id = $1 AND {ACTIVE} \
             AND ($2::timestamptz IS NULL OR updated_at > $2)"
        ))
        .bind(Uuid::from(client_id))
        .bind(updated_since)
        .fetch_one(&self.pool)
        .await
        .map_err(to_port_error)?;

        let items: Vec<Contract> = rows
            .into_iter()
            .map(ContractRow::into_domain)
            .collect::<Result<_, _>>()?;
        Ok(Page::new(items, page, total as u64))
    }

    async fn find_all_active_for_client(
        &self,
        client_id: ClientId,
    ) -> Result<Vec<Contract>, PortError> {
        let rows = sqlx::query_as::<_, ContractRow>(&format!(
            "{SELECT_CONTRACT} WHERE client_id = $1 AND {ACTIVE} ORDER BY created_at, id"
        ))
        .bind(Uuid::from(client_id))
        .fetch_all(&self.pool)
        .await
        .map_err(to_port_error)?;
        rows.into_iter().map(ContractRow::into_domain).collect()
    }

    async fn find_all_for_client(
        &self,
        client_id: ClientId,
        page: PageRequest,
    ) -> Result<Page<Contract>, PortError> {
        let rows = sqlx::query_as::<_, ContractRow>(&format!(
            "{SELECT_CONTRACT} WHERE client_id = $1 ORDER BY created_at, id \
             LIMIT $2 OFFSET $3"
        ))
        .bind(Uuid::from(client_id))
        .bind(i64::from(page.size))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(to_port_error)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contracts WHERE client_id = $1")
            .bind(Uuid::from(client_id))
            .fetch_one(&self.pool)
            .await
            .map_err(to_port_error)?;

        let items: Vec<Contract> = rows
            .into_iter()
            .map(ContractRow::into_domain)
            .collect::<Result<_, _>>()?;
        Ok(Page::new(items, page, total as u64))
    }
}
