//! Request and response data transfer objects
//!
//! Requests validate their shape with `validator` before the domain
//! re-validates semantics; responses serialize in camelCase like the
//! rest of the public API.

pub mod client;
pub mod contract;

use serde::{Deserialize, Serialize};

use core_kernel::{Page, PageRequest};

/// Query parameters for paged listings
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageParams {
    /// Page size ceiling for list endpoints
    const MAX_SIZE: u32 = 100;

    pub fn to_request(self) -> PageRequest {
        let size = self.size.unwrap_or(10).clamp(1, Self::MAX_SIZE);
        PageRequest::new(self.page.unwrap_or(0), size)
    }
}

/// Pagination envelope for list responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    pub fn from_page<U>(page: Page<U>, f: impl FnMut(U) -> T) -> Self {
        let total_pages = page.total_pages();
        Self {
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
            items: page.items.into_iter().map(f).collect(),
        }
    }
}
