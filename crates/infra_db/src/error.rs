//! Database error types

use thiserror::Error;

use core_kernel::PortError;

/// Errors raised by the database layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Migration run failed
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

/// Maps an sqlx error onto the port error taxonomy
///
/// Unique violations (PostgreSQL code 23505) become conflicts, with the
/// offending field derived from the constraint name so the use-case
/// layer can attribute the duplicate.
pub fn to_port_error(error: sqlx::Error) -> PortError {
    match &error {
        sqlx::Error::Database(db_err) => {
            let is_unique = db_err.code().as_deref() == Some("23505");
            if is_unique {
                let field = db_err.constraint().and_then(constraint_field);
                let message = db_err.message().to_string();
                return match field {
                    Some(field) => PortError::conflict_on(message, field),
                    None => PortError::conflict(message),
                };
            }
            PortError::Internal {
                message: db_err.message().to_string(),
                source: Some(Box::new(error)),
            }
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => PortError::Connection {
            message: error.to_string(),
            source: Some(Box::new(error)),
        },
        _ => PortError::Internal {
            message: error.to_string(),
            source: Some(Box::new(error)),
        },
    }
}

/// Field name carried by a unique constraint, if recognized
fn constraint_field(constraint: &str) -> Option<&'static str> {
    match constraint {
        "clients_email_key" => Some("email"),
        "clients_company_identifier_key" => Some("company_identifier"),
        _ => None,
    }
}
