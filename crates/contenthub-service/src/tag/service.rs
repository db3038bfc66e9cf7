//! Tag listing.

use std::sync::Arc;

use contenthub_core::error::AppError;
use contenthub_core::types::Page;
use contenthub_database::TagStore;
use contenthub_entity::tag::{Tag, TagSort};

/// Read access to the tag index.
#[derive(Debug, Clone)]
pub struct TagService {
    tags: Arc<dyn TagStore>,
}

impl TagService {
    /// Creates a new tag service.
    pub fn new(tags: Arc<dyn TagStore>) -> Self {
        Self { tags }
    }

    /// All tags in the order named by `sort` (ascending id by default).
    pub async fn list(&self, sort: Option<&str>) -> Result<Page<Tag>, AppError> {
        self.tags.list(TagSort::parse(sort)).await
    }
}
