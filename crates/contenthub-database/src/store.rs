//! Store traits for the three ContentHub tables.
//!
//! "Live" rows are rows whose soft-delete marker is unset. Every read
//! below returns live rows only.

use async_trait::async_trait;

use contenthub_core::result::AppResult;
use contenthub_core::types::{Page, PageRequest};
use contenthub_entity::comment::{Comment, CommentChanges, CreateComment};
use contenthub_entity::element::{ContentElement, CreateElement, ElementChanges, ElementQuery};
use contenthub_entity::tag::{Tag, TagSort};

/// Persistence for content elements.
#[async_trait]
pub trait ElementStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a live element by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<ContentElement>>;

    /// Run a filtered, sorted, paginated listing. `total` counts every
    /// match before `limit`/`offset`.
    async fn list(&self, query: &ElementQuery) -> AppResult<Page<ContentElement>>;

    /// Live immediate children of any of `parent_ids`, ordered by id.
    async fn find_children(&self, parent_ids: &[i64]) -> AppResult<Vec<ContentElement>>;

    /// Live active roots, ordered by id.
    async fn find_active_roots(&self) -> AppResult<Vec<ContentElement>>;

    /// Every live descendant of `root_ids` at any depth, ordered by id.
    /// Descendants are not filtered by status.
    async fn find_descendants(&self, root_ids: &[i64]) -> AppResult<Vec<ContentElement>>;

    /// Insert an element and return the stored row.
    async fn create(&self, input: &CreateElement) -> AppResult<ContentElement>;

    /// Apply a partial update. `None` when no live row has this id.
    async fn update(&self, id: i64, changes: &ElementChanges)
        -> AppResult<Option<ContentElement>>;

    /// Delete a live element, physically when `hard`, otherwise by setting
    /// its soft-delete marker. Returns the row as it was before deletion.
    async fn delete(&self, id: i64, hard: bool) -> AppResult<Option<ContentElement>>;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Persistence for comments.
#[async_trait]
pub trait CommentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a live comment by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>>;

    /// Top-level comments of an element ordered by id.
    async fn list_top_level(&self, element_id: i64, page: PageRequest)
        -> AppResult<Page<Comment>>;

    /// Live direct replies to any of `parent_ids`, ordered by id.
    async fn find_replies(&self, parent_ids: &[i64]) -> AppResult<Vec<Comment>>;

    /// Insert a comment and return the stored row.
    async fn create(&self, input: &CreateComment) -> AppResult<Comment>;

    /// Apply a partial update. `None` when no live row has this id.
    async fn update(&self, id: i64, changes: &CommentChanges) -> AppResult<Option<Comment>>;

    /// Delete a live comment (see [`ElementStore::delete`]).
    async fn delete(&self, id: i64, hard: bool) -> AppResult<Option<Comment>>;
}

/// Persistence for the tag index.
#[async_trait]
pub trait TagStore: Send + Sync + std::fmt::Debug + 'static {
    /// Atomically create `name` with weight 1 or bump its weight by 1.
    async fn increment(&self, name: &str) -> AppResult<Tag>;

    /// Find a tag by exact name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>>;

    /// List all tags in the given order.
    async fn list(&self, sort: TagSort) -> AppResult<Page<Tag>>;
}
