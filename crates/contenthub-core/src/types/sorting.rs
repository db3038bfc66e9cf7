//! Sorting primitives for list endpoints.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Split a `sort` parameter such as `-title` into its direction and key.
    ///
    /// A leading `-` selects descending order.
    pub fn split_key(raw: &str) -> (Self, &str) {
        match raw.strip_prefix('-') {
            Some(key) => (Self::Desc, key),
            None => (Self::Asc, raw),
        }
    }

    /// Orient an ascending comparison result in this direction.
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}
