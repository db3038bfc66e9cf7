//! Translates list query-string parameters into an [`ElementQuery`].

use serde::{Deserialize, Serialize};

use contenthub_core::error::AppError;
use contenthub_core::types::PageRequest;
use contenthub_entity::element::{ElementQuery, ElementSort, ParentScope, TextFilter};

/// Raw `GET /contentelements` parameters, exactly as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementListParams {
    pub all: Option<String>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
    pub parent: Option<String>,
    pub tree: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// `tree` value that lifts the default root-only restriction.
const TREE_ALL_LEVELS: &str = "-1";

/// Drop absent and empty parameters.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse a non-negative integer parameter. Values must fit a PostgreSQL
/// `BIGINT`.
pub fn parse_count(field: &str, value: Option<&str>) -> Result<Option<u64>, AppError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    raw.parse::<u64>()
        .ok()
        .filter(|count| i64::try_from(*count).is_ok())
        .map(Some)
        .ok_or_else(|| {
            AppError::validation(
                field,
                format!("{field} must be an integer between 0 and {}", i64::MAX),
            )
        })
}

impl ElementListParams {
    /// Build the typed query. `default_limit` applies when `limit` is absent.
    pub fn into_query(&self, default_limit: u64) -> Result<ElementQuery, AppError> {
        let text = TextFilter {
            all: present(&self.all).map(str::to_owned),
            id: present(&self.id).map(str::to_owned),
            title: present(&self.title).map(str::to_owned),
            description: present(&self.description).map(str::to_owned),
            content: present(&self.content).map(str::to_owned),
            tags: present(&self.tags).map(str::to_owned),
        };

        let tree = self.tree.as_deref();
        let parent = match present(&self.parent) {
            Some(raw) => ParentScope::Exact(raw.parse().map_err(|_| {
                AppError::validation("parent", "parent must be an integer element id")
            })?),
            None if tree == Some(TREE_ALL_LEVELS) => ParentScope::Any,
            None => ParentScope::RootsOnly,
        };

        let limit = parse_count("limit", present(&self.limit))?.unwrap_or(default_limit);
        let offset = parse_count("offset", present(&self.offset))?.unwrap_or(0);

        Ok(ElementQuery {
            text,
            status: present(&self.status).map(str::to_owned),
            parent,
            sort: ElementSort::parse(present(&self.sort)),
            page: PageRequest::new(limit, offset),
            with_children: matches!(tree, None | Some("") | Some("1")),
        })
    }
}
