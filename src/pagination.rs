//! Pagination types for list endpoints.
//!
//! Requests carry a 1-based `page` and a `limit`; responses echo both back
//! together with the total row count.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Query parameters for paginated list endpoints.
#[derive(Debug, Deserialize, Default)]
pub struct PagingQuery {
    /// 1-based page number (default: 1)
    #[serde(default)]
    pub page: Option<i64>,
    /// Items per page (default: 10, max: 100)
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PagingQuery {
    /// Get the page, falling back to the first page for absent or non-positive values
    pub fn page(&self) -> i64 {
        match self.page {
            Some(page) if page > 0 => page,
            _ => DEFAULT_PAGE,
        }
    }

    /// Get the limit. Out-of-range values fall back to the default rather than the bound.
    pub fn limit(&self) -> i64 {
        match self.limit {
            Some(limit) if limit > 0 && limit <= MAX_LIMIT => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    /// Normalize into a paging block with `total` not yet known.
    pub fn normalize(&self) -> Paging {
        Paging {
            page: self.page(),
            limit: self.limit(),
            total: 0,
        }
    }
}

/// Paging block echoed back with every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page: i64,
    pub limit: i64,
    /// Total number of rows (across all pages)
    pub total: i64,
}

impl Paging {
    /// Rows to skip before this page starts
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn with_total(self, total: i64) -> Self {
        Self { total, ..self }
    }
}

/// Response wrapper for list endpoints.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    /// The items in this page
    pub data: Vec<T>,
    pub paging: Paging,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, paging: Paging) -> Self {
        Self { data, paging }
    }
}
