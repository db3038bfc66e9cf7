//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use contenthub_core::config::{DatabaseConfig, StoreProvider};
use contenthub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryCommentStore, MemoryElementStore, MemoryTagStore};
use crate::migration::run_migrations;
use crate::repositories::{CommentRepository, ElementRepository, TagRepository};
use crate::store::{CommentStore, ElementStore, TagStore};

/// The three stores the service layer needs, backed by one provider.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    elements: Arc<dyn ElementStore>,
    comments: Arc<dyn CommentStore>,
    tags: Arc<dyn TagStore>,
    /// Present for the PostgreSQL backend.
    pool: Option<DatabasePool>,
}

impl StoreManager {
    /// Build the stores described by `config`, running migrations first
    /// when `auto_migrate` is set.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL record store");
                let pool = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory record store");
                Ok(Self::memory())
            }
        }
    }

    /// Stores backed by an open PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            elements: Arc::new(ElementRepository::new(pg.clone())),
            comments: Arc::new(CommentRepository::new(pg.clone())),
            tags: Arc::new(TagRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            elements: Arc::new(MemoryElementStore::new()),
            comments: Arc::new(MemoryCommentStore::new()),
            tags: Arc::new(MemoryTagStore::new()),
            pool: None,
        }
    }

    pub fn elements(&self) -> Arc<dyn ElementStore> {
        Arc::clone(&self.elements)
    }

    pub fn comments(&self) -> Arc<dyn CommentStore> {
        Arc::clone(&self.comments)
    }

    pub fn tags(&self) -> Arc<dyn TagStore> {
        Arc::clone(&self.tags)
    }

    /// Check store connectivity.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.elements.health_check().await
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(ref pool) = self.pool {
            pool.close().await;
        }
    }
}
