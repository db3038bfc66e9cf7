//! Tag repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use contenthub_core::error::{AppError, ErrorKind};
use contenthub_core::result::AppResult;
use contenthub_core::types::Page;
use contenthub_entity::tag::{Tag, TagSort, TagSortColumn};

use crate::store::TagStore;

/// PostgreSQL-backed tag store.
#[derive(Debug, Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    /// Create a new tag repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Render the `ORDER BY` clause for a tag listing.
pub(crate) fn order_clause(sort: TagSort) -> String {
    let mut clause = format!(
        "ORDER BY {} {}",
        sort.column.column_name(),
        sort.direction.as_sql()
    );
    if sort.column != TagSortColumn::Id {
        clause.push_str(", id ASC");
    }
    clause
}

#[async_trait]
impl TagStore for TagRepository {
    async fn increment(&self, name: &str) -> AppResult<Tag> {
        sqlx::query_as::<_, Tag>(
            r#"INSERT INTO content_tags (name, weight) VALUES ($1, 1)
               ON CONFLICT (name) DO UPDATE
               SET weight = content_tags.weight + 1, updated_at = NOW()
               RETURNING *"#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert tag", e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM content_tags WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tag", e))
    }

    async fn list(&self, sort: TagSort) -> AppResult<Page<Tag>> {
        let sql = format!("SELECT * FROM content_tags {}", order_clause(sort));
        let tags = sqlx::query_as::<_, Tag>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tags", e))?;

        let total = tags.len() as u64;
        Ok(Page::new(tags, total))
    }
}
