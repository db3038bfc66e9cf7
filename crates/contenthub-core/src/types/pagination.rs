//! Offset/limit pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// A window into an ordered result set.
///
/// `limit == None` means "no limit", which the comment listing uses when
/// the caller does not ask for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Maximum number of rows to return.
    pub limit: Option<u64>,
    /// Number of rows to skip.
    #[serde(default)]
    pub offset: u64,
}

impl PageRequest {
    /// Create a bounded page request.
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit: Some(limit),
            offset,
        }
    }

    /// Create a request for every row after `offset`.
    pub fn unbounded(offset: u64) -> Self {
        Self {
            limit: None,
            offset,
        }
    }

    /// Apply this window to an already-ordered iterator.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let iter = items.into_iter().skip(self.offset as usize);
        match self.limit {
            Some(limit) => iter.take(limit as usize).collect(),
            None => iter.collect(),
        }
    }
}

/// One page of results together with the pre-pagination total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The rows in this page.
    pub items: Vec<T>,
    /// Number of rows matching the query before `limit`/`offset`.
    pub total: u64,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}
