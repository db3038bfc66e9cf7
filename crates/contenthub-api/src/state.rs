//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use contenthub_auth::JwtDecoder;
use contenthub_core::config::AppConfig;
use contenthub_database::StoreManager;
use contenthub_service::{CommentService, ElementService, TagAccumulator, TagService, TreeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Record store backends
    pub stores: StoreManager,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Content element CRUD and listing
    pub element_service: Arc<ElementService>,
    /// Parent listing
    pub tree_service: Arc<TreeService>,
    /// Comment service
    pub comment_service: Arc<CommentService>,
    /// Tag listing
    pub tag_service: Arc<TagService>,
}

impl AppState {
    /// Wire every service on top of `stores`.
    pub fn new(config: AppConfig, stores: StoreManager) -> Self {
        let content = Arc::new(config.content.clone());
        let accumulator = Arc::new(TagAccumulator::new(stores.tags()));

        let element_service = Arc::new(ElementService::new(
            stores.elements(),
            stores.comments(),
            accumulator,
            Arc::clone(&content),
        ));
        let tree_service = Arc::new(TreeService::new(stores.elements()));
        let comment_service = Arc::new(CommentService::new(
            stores.comments(),
            stores.elements(),
            content,
        ));
        let tag_service = Arc::new(TagService::new(stores.tags()));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            element_service,
            tree_service,
            comment_service,
            tag_service,
        }
    }
}
