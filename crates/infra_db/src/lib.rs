//! Infrastructure database layer
//!
//! PostgreSQL adapters for the `domain_client` repository ports. The
//! schema carries the uniqueness rules the use-case layer checks
//! optimistically (email, company identifier), so a racing insert is
//! still rejected by the store and surfaces as a conflict.
//!
//! Migrations are embedded and run through [`run_migrations`] by the
//! server binary at startup.

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{PgClientRepository, PgContractRepository};

/// Embedded SQL migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Applies any pending migrations
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` when a migration cannot be
/// applied.
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
}
