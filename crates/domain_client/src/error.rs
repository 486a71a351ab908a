//! Domain error taxonomy for client and contract operations

use core_kernel::{ClientId, ContractId, CoreError, MoneyError, PortError};
use thiserror::Error;

/// Errors surfaced by the use-case layer
///
/// Duplicate variants come either from the check-then-act lookups in the
/// use cases or from unique-constraint conflicts reported by the store.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("Contract not found: {0}")]
    ContractNotFound(ContractId),

    #[error("A client with email {0} already exists")]
    DuplicateEmail(String),

    #[error("A company with identifier {0} already exists")]
    DuplicateIdentifier(String),

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error(transparent)]
    Repository(#[from] PortError),
}

impl ClientError {
    /// Maps a storage conflict onto the matching duplicate variant
    ///
    /// Keeps the unique constraints authoritative when the check-then-act
    /// window races with a concurrent insert.
    pub fn from_conflict(error: PortError, email: &str, identifier: Option<&str>) -> Self {
        if let PortError::Conflict { field: Some(ref field), .. } = error {
            if field == "email" {
                return ClientError::DuplicateEmail(email.to_string());
            }
            if field == "company_identifier" {
                if let Some(identifier) = identifier {
                    return ClientError::DuplicateIdentifier(identifier.to_string());
                }
            }
        }
        ClientError::Repository(error)
    }
}
