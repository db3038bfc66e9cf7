//! Flattened parent-picker listing.

use serde::{Deserialize, Serialize};

/// One row of the `/parents` listing.
///
/// `name` is the element title prefixed by `--` per nesting level and
/// suffixed with the raw parent id, e.g. `"---- Local2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentListEntry {
    pub id: i64,
    pub name: String,
}

impl ParentListEntry {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
