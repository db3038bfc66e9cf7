//! Comment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use contenthub_core::error::{AppError, ErrorKind};
use contenthub_core::result::AppResult;
use contenthub_core::types::{Page, PageRequest};
use contenthub_entity::comment::{Comment, CommentChanges, CreateComment};

use crate::store::CommentStore;

/// PostgreSQL-backed comment store.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for CommentRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM content_comments WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    async fn list_top_level(
        &self,
        element_id: i64,
        page: PageRequest,
    ) -> AppResult<Page<Comment>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM content_comments \
             WHERE content_element_id = $1 AND parent_comment_id = 0 AND deleted_at IS NULL",
        )
        .bind(element_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count comments", e))?;

        // A NULL limit means no limit.
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM content_comments \
             WHERE content_element_id = $1 AND parent_comment_id = 0 AND deleted_at IS NULL \
             ORDER BY id ASC LIMIT $2 OFFSET $3",
        )
        .bind(element_id)
        .bind(page.limit.map(|l| l as i64))
        .bind(page.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))?;

        Ok(Page::new(comments, total as u64))
    }

    async fn find_replies(&self, parent_ids: &[i64]) -> AppResult<Vec<Comment>> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM content_comments \
             WHERE parent_comment_id = ANY($1) AND deleted_at IS NULL ORDER BY id ASC",
        )
        .bind(parent_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list replies", e))
    }

    async fn create(&self, input: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            r#"INSERT INTO content_comments
                (text, owner_user_id, parent_comment_id, content_element_id)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(&input.text)
        .bind(input.owner_user_id)
        .bind(input.parent_comment_id)
        .bind(input.content_element_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    async fn update(&self, id: i64, changes: &CommentChanges) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>(
            "UPDATE content_comments SET text = COALESCE($2, text), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&changes.text)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update comment", e))
    }

    async fn delete(&self, id: i64, hard: bool) -> AppResult<Option<Comment>> {
        let sql = if hard {
            "DELETE FROM content_comments WHERE id = $1 AND deleted_at IS NULL RETURNING *"
        } else {
            "UPDATE content_comments SET deleted_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *"
        };
        sqlx::query_as::<_, Comment>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete comment", e))
    }
}
