//! Content element repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use contenthub_core::error::{AppError, ErrorKind};
use contenthub_core::result::AppResult;
use contenthub_core::types::Page;
use contenthub_entity::element::{
    ContentElement, CreateElement, ElementChanges, ElementQuery, TextFilter,
};

use crate::store::ElementStore;

/// PostgreSQL-backed element store.
#[derive(Debug, Clone)]
pub struct ElementRepository {
    pool: PgPool,
}

impl ElementRepository {
    /// Create a new element repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `LIKE` metacharacters and wrap in `%…%`.
pub(crate) fn like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn push_text_filter(builder: &mut QueryBuilder<'_, Postgres>, text: &TextFilter) {
    if let Some(ref needle) = text.all {
        let pattern = like_pattern(needle);
        builder.push(" AND (id::text ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR tags ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    let columns = [
        ("id::text", &text.id),
        ("title", &text.title),
        ("description", &text.description),
        ("content", &text.content),
        ("tags", &text.tags),
    ];
    for (column, needle) in columns {
        if let Some(needle) = needle {
            builder.push(format!(" AND {column} ILIKE "));
            builder.push_bind(like_pattern(needle));
        }
    }
}

/// Append the `WHERE` clause shared by the listing and its count.
fn push_where(builder: &mut QueryBuilder<'_, Postgres>, query: &ElementQuery) {
    builder.push(" WHERE deleted_at IS NULL");

    if let Some(parent_id) = query.parent.parent_id() {
        builder.push(" AND parent_id = ");
        builder.push_bind(parent_id);
    }
    if let Some(ref status) = query.status {
        builder.push(" AND status::text = ");
        builder.push_bind(status.clone());
    }
    push_text_filter(builder, &query.text);
}

/// Build the paginated `SELECT` for a listing.
pub(crate) fn build_list_query(query: &ElementQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT * FROM content_elements");
    push_where(&mut builder, query);

    builder.push(format!(
        " ORDER BY {} {}",
        query.sort.column.column_name(),
        query.sort.direction.as_sql()
    ));
    if query.sort.needs_tie_break() {
        builder.push(", id ASC");
    }

    if let Some(limit) = query.page.limit {
        builder.push(" LIMIT ");
        builder.push_bind(limit as i64);
    }
    builder.push(" OFFSET ");
    builder.push_bind(query.page.offset as i64);
    builder
}

/// Build the pre-pagination `COUNT(*)` for a listing.
pub(crate) fn build_count_query(query: &ElementQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM content_elements");
    push_where(&mut builder, query);
    builder
}

const DESCENDANTS_SQL: &str = r#"
WITH RECURSIVE subtree AS (
    SELECT * FROM content_elements
    WHERE parent_id = ANY($1) AND deleted_at IS NULL
    UNION
    SELECT e.* FROM content_elements e
    JOIN subtree s ON e.parent_id = s.id
    WHERE e.deleted_at IS NULL
)
SELECT * FROM subtree ORDER BY id ASC
"#;

#[async_trait]
impl ElementStore for ElementRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<ContentElement>> {
        sqlx::query_as::<_, ContentElement>(
            "SELECT * FROM content_elements WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find element", e))
    }

    async fn list(&self, query: &ElementQuery) -> AppResult<Page<ContentElement>> {
        let mut count = build_count_query(query);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count elements", e)
            })?;

        let mut select = build_list_query(query);
        let items = select
            .build_query_as::<ContentElement>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list elements", e)
            })?;

        Ok(Page::new(items, total as u64))
    }

    async fn find_children(&self, parent_ids: &[i64]) -> AppResult<Vec<ContentElement>> {
        if parent_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, ContentElement>(
            "SELECT * FROM content_elements \
             WHERE parent_id = ANY($1) AND deleted_at IS NULL ORDER BY id ASC",
        )
        .bind(parent_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn find_active_roots(&self) -> AppResult<Vec<ContentElement>> {
        sqlx::query_as::<_, ContentElement>(
            "SELECT * FROM content_elements \
             WHERE parent_id = 0 AND status = 'active' AND deleted_at IS NULL ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list root elements", e))
    }

    async fn find_descendants(&self, root_ids: &[i64]) -> AppResult<Vec<ContentElement>> {
        if root_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, ContentElement>(DESCENDANTS_SQL)
            .bind(root_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load element subtree", e)
            })
    }

    async fn create(&self, input: &CreateElement) -> AppResult<ContentElement> {
        sqlx::query_as::<_, ContentElement>(
            r#"INSERT INTO content_elements
                (parent_id, slug, title, description, content, meta_title,
                 meta_description, kind, status, tags, owner_user_id)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
               RETURNING *"#,
        )
        .bind(input.parent_id)
        .bind(&input.slug)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.content)
        .bind(&input.meta_title)
        .bind(&input.meta_description)
        .bind(&input.kind)
        .bind(input.status)
        .bind(&input.tags)
        .bind(input.owner_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create element", e))
    }

    async fn update(
        &self,
        id: i64,
        changes: &ElementChanges,
    ) -> AppResult<Option<ContentElement>> {
        sqlx::query_as::<_, ContentElement>(
            r#"UPDATE content_elements SET
                parent_id = COALESCE($2, parent_id),
                slug = COALESCE($3, slug),
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                content = COALESCE($6, content),
                meta_title = COALESCE($7, meta_title),
                meta_description = COALESCE($8, meta_description),
                kind = COALESCE($9, kind),
                status = COALESCE($10, status),
                tags = COALESCE($11, tags),
                updated_at = NOW()
               WHERE id = $1 AND deleted_at IS NULL
               RETURNING *"#,
        )
        .bind(id)
        .bind(changes.parent_id)
        .bind(&changes.slug)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.content)
        .bind(&changes.meta_title)
        .bind(&changes.meta_description)
        .bind(&changes.kind)
        .bind(changes.status)
        .bind(&changes.tags)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update element", e))
    }

    async fn delete(&self, id: i64, hard: bool) -> AppResult<Option<ContentElement>> {
        let sql = if hard {
            "DELETE FROM content_elements WHERE id = $1 AND deleted_at IS NULL RETURNING *"
        } else {
            "UPDATE content_elements SET deleted_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *"
        };
        sqlx::query_as::<_, ContentElement>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete element", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        crate::connection::ping(&self.pool).await
    }
}
