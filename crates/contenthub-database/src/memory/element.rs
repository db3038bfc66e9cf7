//! In-memory element store.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use contenthub_core::result::AppResult;
use contenthub_core::types::Page;
use contenthub_entity::element::{
    ContentElement, CreateElement, ElementChanges, ElementQuery, ElementStatus,
};

use crate::store::ElementStore;

/// Element store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryElementStore {
    rows: RwLock<BTreeMap<i64, ContentElement>>,
    next_id: AtomicI64,
}

impl MemoryElementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ElementStore for MemoryElementStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<ContentElement>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).filter(|e| e.deleted_at.is_none()).cloned())
    }

    async fn list(&self, query: &ElementQuery) -> AppResult<Page<ContentElement>> {
        let rows = self.rows.read().await;
        let mut matched: Vec<ContentElement> =
            rows.values().filter(|e| query.matches(e)).cloned().collect();
        matched.sort_by(|a, b| query.sort.compare(a, b));

        let total = matched.len() as u64;
        Ok(Page::new(query.page.apply(matched), total))
    }

    async fn find_children(&self, parent_ids: &[i64]) -> AppResult<Vec<ContentElement>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|e| e.deleted_at.is_none() && parent_ids.contains(&e.parent_id))
            .cloned()
            .collect())
    }

    async fn find_active_roots(&self) -> AppResult<Vec<ContentElement>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|e| {
                e.deleted_at.is_none() && e.parent_id == 0 && e.status == ElementStatus::Active
            })
            .cloned()
            .collect())
    }

    async fn find_descendants(&self, root_ids: &[i64]) -> AppResult<Vec<ContentElement>> {
        let rows = self.rows.read().await;
        let mut seen: HashSet<i64> = HashSet::new();
        let mut frontier: Vec<i64> = root_ids.to_vec();
        let mut found = Vec::new();

        // Expand one level per pass until no new rows appear.
        while !frontier.is_empty() {
            let level: Vec<&ContentElement> = rows
                .values()
                .filter(|e| e.deleted_at.is_none() && frontier.contains(&e.parent_id))
                .filter(|e| seen.insert(e.id))
                .collect();
            frontier = level.iter().map(|e| e.id).collect();
            found.extend(level.into_iter().cloned());
        }

        found.sort_by_key(|e| e.id);
        Ok(found)
    }

    async fn create(&self, input: &CreateElement) -> AppResult<ContentElement> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let element = ContentElement {
            id,
            parent_id: input.parent_id,
            slug: input.slug.clone(),
            title: input.title.clone(),
            description: input.description.clone(),
            content: input.content.clone(),
            meta_title: input.meta_title.clone(),
            meta_description: input.meta_description.clone(),
            kind: input.kind.clone(),
            status: input.status,
            tags: input.tags.clone(),
            owner_user_id: input.owner_user_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            elements: Vec::new(),
            comments: Vec::new(),
        };
        self.rows.write().await.insert(id, element.clone());
        Ok(element)
    }

    async fn update(
        &self,
        id: i64,
        changes: &ElementChanges,
    ) -> AppResult<Option<ContentElement>> {
        let mut rows = self.rows.write().await;
        let Some(element) = rows.get_mut(&id).filter(|e| e.deleted_at.is_none()) else {
            return Ok(None);
        };
        changes.apply_to(element);
        element.updated_at = Utc::now();
        Ok(Some(element.clone()))
    }

    async fn delete(&self, id: i64, hard: bool) -> AppResult<Option<ContentElement>> {
        let mut rows = self.rows.write().await;
        if !rows.get(&id).is_some_and(|e| e.deleted_at.is_none()) {
            return Ok(None);
        }
        if hard {
            return Ok(rows.remove(&id));
        }
        Ok(rows.get_mut(&id).map(|element| {
            let before = element.clone();
            element.deleted_at = Some(Utc::now());
            before
        }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
