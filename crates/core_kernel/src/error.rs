//! Core error types used across the system

use crate::money::MoneyError;
use thiserror::Error;

/// Core error type for the kernel
///
/// `Validation` covers every value-object construction failure (email,
/// phone, company identifier, dates); money arithmetic keeps its own
/// error type and converts via `From`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}
