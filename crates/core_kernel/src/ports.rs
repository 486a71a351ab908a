//! Ports and Adapters Infrastructure
//!
//! Foundational types for the repository ports defined in the domain
//! crates. Each domain defines its own port trait extending the marker
//! trait here; adapters (PostgreSQL, in-memory mock) implement them.
//!
//! Lookups return `Ok(None)` on a miss rather than an error; `PortError`
//! is reserved for storage-level failures, conflicts surfaced by unique
//! constraints, and malformed persisted data.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found where its existence was required
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// The operation conflicts with existing data (unique constraint)
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        field: Option<String>,
    },

    /// Persisted data failed domain validation during rehydration
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Connection to the underlying store failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Conflict error attributed to a specific field
    pub fn conflict_on(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Marker trait for all domain ports
///
/// Port traits extend this marker so trait objects are thread-safe and
/// usable in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

/// A page request with 0-based page index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Row offset of the first element on this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

/// A page of results with total-count metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    /// Number of pages needed to hold all elements
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    /// Maps the items, preserving the page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Client", "123");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Client"));
        assert!(error.to_string().contains("123"));
    }

    #[test]
    fn test_port_error_conflict_field() {
        let error = PortError::conflict_on("email already exists", "email");
        assert!(error.is_conflict());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 75);
    }

    #[test]
    fn test_page_total_pages() {
        let page: Page<u32> = Page::new(vec![1, 2, 3], PageRequest::new(0, 10), 21);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_page_map_preserves_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 6);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total_elements, 6);
    }
}
