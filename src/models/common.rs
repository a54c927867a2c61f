//! Common types shared across the entity stores.

use serde::{Deserialize, Serialize};

/// Pagination parameters for listing requests.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl PaginationParams {
    pub fn page_or_default(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit_or(&self, default: usize) -> usize {
        self.limit.unwrap_or(default).max(1)
    }
}

/// Pagination metadata computed for a filtered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

impl Pagination {
    /// Compute metadata for `total` records under the given parameters.
    pub fn for_total(total: usize, page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
        }
    }
}

/// Slice one page out of a filtered collection.
///
/// Listing always returns the full filtered set; this is the single place
/// where page slicing happens, so every caller gets the same policy.
pub fn page_slice<T: Clone>(records: &[T], params: PaginationParams, default_limit: usize) -> (Vec<T>, Pagination) {
    let page = params.page_or_default();
    let limit = params.limit_or(default_limit);
    let start = (page - 1).saturating_mul(limit).min(records.len());
    let end = (start + limit).min(records.len());
    (
        records[start..end].to_vec(),
        Pagination::for_total(records.len(), page, limit),
    )
}
