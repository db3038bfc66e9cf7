//! Typed content element list query.
//!
//! An [`ElementQuery`] is backend-neutral: the PostgreSQL repository renders
//! it into SQL, the memory store evaluates it with [`ElementQuery::matches`]
//! and [`ElementSort::compare`]. Both must agree on the semantics below.
//!
//! Text columns sort case-insensitively in memory. PostgreSQL orders them by
//! the column collation, which can still differ for punctuation and accents.

use std::cmp::Ordering;

use contenthub_core::types::{PageRequest, SortDirection};
use serde::{Deserialize, Serialize};

use super::model::ContentElement;

/// Substring filters. Each present value is matched case-insensitively as a
/// literal substring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFilter {
    /// Matches id, title, description or tags (any of them).
    pub all: Option<String>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
}

impl TextFilter {
    /// Whether no substring filter is set.
    pub fn is_empty(&self) -> bool {
        self.all.is_none()
            && self.id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.tags.is_none()
    }

    fn matches(&self, element: &ContentElement) -> bool {
        let id = element.id.to_string();

        if let Some(ref needle) = self.all {
            let any = contains_ci(&id, needle)
                || contains_ci(&element.title, needle)
                || contains_ci(&element.description, needle)
                || contains_ci(&element.tags, needle);
            if !any {
                return false;
            }
        }

        let columns: [(&Option<String>, &str); 5] = [
            (&self.id, &id),
            (&self.title, &element.title),
            (&self.description, &element.description),
            (&self.content, &element.content),
            (&self.tags, &element.tags),
        ];
        columns.iter().all(|(needle, haystack)| match needle {
            Some(needle) => contains_ci(haystack, needle),
            None => true,
        })
    }
}

/// Which parents a listing is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParentScope {
    /// Children of one element (`0` selects roots explicitly).
    Exact(i64),
    /// Root elements only.
    #[default]
    RootsOnly,
    /// No parent restriction.
    Any,
}

impl ParentScope {
    /// The `parent_id` this scope pins, if any.
    pub fn parent_id(&self) -> Option<i64> {
        match self {
            Self::Exact(id) => Some(*id),
            Self::RootsOnly => Some(0),
            Self::Any => None,
        }
    }
}

/// Sortable element columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementSortColumn {
    Id,
    Title,
    CreatedAt,
    Status,
    /// Owner user id (`user` in the query string).
    User,
    Kind,
}

impl ElementSortColumn {
    /// Resolve a public sort key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "created_at" => Some(Self::CreatedAt),
            "status" => Some(Self::Status),
            "user" => Some(Self::User),
            "kind" => Some(Self::Kind),
            _ => None,
        }
    }

    /// Column name in `content_elements`.
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::CreatedAt => "created_at",
            Self::Status => "status",
            Self::User => "owner_user_id",
            Self::Kind => "kind",
        }
    }
}

/// Ordering of an element listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSort {
    pub column: ElementSortColumn,
    pub direction: SortDirection,
}

impl Default for ElementSort {
    /// Newest first (`-id`).
    fn default() -> Self {
        Self {
            column: ElementSortColumn::Id,
            direction: SortDirection::Desc,
        }
    }
}

impl ElementSort {
    /// Parse a `sort` parameter. Unknown or missing keys fall back to `-id`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let (direction, key) = SortDirection::split_key(raw);
        match ElementSortColumn::from_key(key) {
            Some(column) => Self { column, direction },
            None => Self::default(),
        }
    }

    /// Whether rows need an `id ASC` tie-break after the primary key.
    pub fn needs_tie_break(&self) -> bool {
        self.column != ElementSortColumn::Id
    }

    /// Compare two elements in this order, ties broken by ascending id.
    pub fn compare(&self, a: &ContentElement, b: &ContentElement) -> Ordering {
        let primary = match self.column {
            ElementSortColumn::Id => a.id.cmp(&b.id),
            ElementSortColumn::Title => compare_text(&a.title, &b.title),
            ElementSortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            // Declaration order of the Postgres enum.
            ElementSortColumn::Status => status_rank(a).cmp(&status_rank(b)),
            ElementSortColumn::User => a.owner_user_id.cmp(&b.owner_user_id),
            ElementSortColumn::Kind => compare_text(&a.kind, &b.kind),
        };
        self.direction.apply(primary).then_with(|| a.id.cmp(&b.id))
    }
}

fn status_rank(element: &ContentElement) -> u8 {
    use super::status::ElementStatus;
    match element.status {
        ElementStatus::Active => 0,
        ElementStatus::Suspend => 1,
        ElementStatus::Draft => 2,
    }
}

/// A fully resolved content element listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementQuery {
    pub text: TextFilter,
    /// Exact status match (compared textually).
    pub status: Option<String>,
    pub parent: ParentScope,
    pub sort: ElementSort,
    pub page: PageRequest,
    /// Attach each result's immediate children.
    pub with_children: bool,
}

impl Default for ElementQuery {
    fn default() -> Self {
        Self {
            text: TextFilter::default(),
            status: None,
            parent: ParentScope::RootsOnly,
            sort: ElementSort::default(),
            page: PageRequest::new(5, 0),
            with_children: true,
        }
    }
}

impl ElementQuery {
    /// Evaluate every predicate against one element. Soft-deleted elements
    /// never match.
    pub fn matches(&self, element: &ContentElement) -> bool {
        if element.deleted_at.is_some() {
            return false;
        }
        if let Some(parent_id) = self.parent.parent_id() {
            if element.parent_id != parent_id {
                return false;
            }
        }
        if let Some(ref status) = self.status {
            if element.status.as_str() != status {
                return false;
            }
        }
        self.text.matches(element)
    }
}

/// Case-folded ordering, byte order among values that fold equal.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Case-insensitive literal substring test.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
