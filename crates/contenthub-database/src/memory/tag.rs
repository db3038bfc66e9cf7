//! In-memory tag store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use contenthub_core::result::AppResult;
use contenthub_core::types::Page;
use contenthub_entity::tag::{Tag, TagSort};

use crate::store::TagStore;

/// Tag store kept in process memory. The whole index sits behind one
/// mutex so that lookup-or-create is atomic.
#[derive(Debug, Default)]
pub struct MemoryTagStore {
    rows: Mutex<BTreeMap<i64, Tag>>,
}

impl MemoryTagStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagStore for MemoryTagStore {
    async fn increment(&self, name: &str) -> AppResult<Tag> {
        let mut rows = self.rows.lock().await;
        let now = Utc::now();

        if let Some(tag) = rows.values_mut().find(|t| t.name == name) {
            tag.weight += 1;
            tag.updated_at = now;
            return Ok(tag.clone());
        }

        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let tag = Tag {
            id,
            name: name.to_string(),
            weight: 1,
            created_at: now,
            updated_at: now,
        };
        rows.insert(id, tag.clone());
        Ok(tag)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Tag>> {
        let rows = self.rows.lock().await;
        Ok(rows.values().find(|t| t.name == name).cloned())
    }

    async fn list(&self, sort: TagSort) -> AppResult<Page<Tag>> {
        let rows = self.rows.lock().await;
        let mut tags: Vec<Tag> = rows.values().cloned().collect();
        tags.sort_by(|a, b| sort.compare(a, b));
        let total = tags.len() as u64;
        Ok(Page::new(tags, total))
    }
}
