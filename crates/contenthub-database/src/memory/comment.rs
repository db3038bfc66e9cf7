//! In-memory comment store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use contenthub_core::result::AppResult;
use contenthub_core::types::{Page, PageRequest};
use contenthub_entity::comment::{Comment, CommentChanges, CreateComment};

use crate::store::CommentStore;

/// Comment store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    rows: RwLock<BTreeMap<i64, Comment>>,
    next_id: AtomicI64,
}

impl MemoryCommentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).filter(|c| c.deleted_at.is_none()).cloned())
    }

    async fn list_top_level(
        &self,
        element_id: i64,
        page: PageRequest,
    ) -> AppResult<Page<Comment>> {
        let rows = self.rows.read().await;
        let matched: Vec<Comment> = rows
            .values()
            .filter(|c| {
                c.deleted_at.is_none() && c.content_element_id == element_id && c.is_top_level()
            })
            .cloned()
            .collect();
        let total = matched.len() as u64;
        Ok(Page::new(page.apply(matched), total))
    }

    async fn find_replies(&self, parent_ids: &[i64]) -> AppResult<Vec<Comment>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|c| c.deleted_at.is_none() && parent_ids.contains(&c.parent_comment_id))
            .cloned()
            .collect())
    }

    async fn create(&self, input: &CreateComment) -> AppResult<Comment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let comment = Comment {
            id,
            text: input.text.clone(),
            owner_user_id: input.owner_user_id,
            parent_comment_id: input.parent_comment_id,
            content_element_id: input.content_element_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            replies: Vec::new(),
        };
        self.rows.write().await.insert(id, comment.clone());
        Ok(comment)
    }

    async fn update(&self, id: i64, changes: &CommentChanges) -> AppResult<Option<Comment>> {
        let mut rows = self.rows.write().await;
        let Some(comment) = rows.get_mut(&id).filter(|c| c.deleted_at.is_none()) else {
            return Ok(None);
        };
        changes.apply_to(comment);
        comment.updated_at = Utc::now();
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: i64, hard: bool) -> AppResult<Option<Comment>> {
        let mut rows = self.rows.write().await;
        if !rows.get(&id).is_some_and(|c| c.deleted_at.is_none()) {
            return Ok(None);
        }
        if hard {
            return Ok(rows.remove(&id));
        }
        Ok(rows.get_mut(&id).map(|comment| {
            let before = comment.clone();
            comment.deleted_at = Some(Utc::now());
            before
        }))
    }
}
