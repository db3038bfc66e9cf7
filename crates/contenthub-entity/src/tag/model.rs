//! Tag entity model.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use contenthub_core::types::SortDirection;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::element::compare_text;

/// A tag name and how many element creations have used it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i64,
    /// Tag name, unique.
    pub name: String,
    /// Occurrence counter. Never decremented.
    pub weight: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sortable tag columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSortColumn {
    Id,
    Name,
    Weight,
}

impl TagSortColumn {
    /// Column name in `content_tags`.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Weight => "weight",
        }
    }
}

/// Ordering of the tag listing. Defaults to ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSort {
    pub column: TagSortColumn,
    pub direction: SortDirection,
}

impl Default for TagSort {
    fn default() -> Self {
        Self {
            column: TagSortColumn::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl TagSort {
    /// Parse a `sort` parameter; unknown keys are ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let (direction, key) = SortDirection::split_key(raw);
        let column = match key {
            "id" => TagSortColumn::Id,
            "name" => TagSortColumn::Name,
            "weight" => TagSortColumn::Weight,
            _ => return Self::default(),
        };
        Self { column, direction }
    }

    /// Compare two tags in this order, ties broken by ascending id.
    pub fn compare(&self, a: &Tag, b: &Tag) -> Ordering {
        let primary = match self.column {
            TagSortColumn::Id => a.id.cmp(&b.id),
            TagSortColumn::Name => compare_text(&a.name, &b.name),
            TagSortColumn::Weight => a.weight.cmp(&b.weight),
        };
        self.direction.apply(primary).then_with(|| a.id.cmp(&b.id))
    }
}
