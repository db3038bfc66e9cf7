//! Shared fixtures for service tests.

use std::sync::Arc;

use chrono::Utc;

use contenthub_core::config::ContentConfig;
use contenthub_database::StoreManager;
use contenthub_entity::element::{ContentElement, ElementStatus};
use contenthub_entity::user::UserRole;

use crate::comment::CommentService;
use crate::context::RequestContext;
use crate::element::{ElementService, NewElement};
use crate::tag::{TagAccumulator, TagService};

pub(crate) fn element(id: i64, parent_id: i64, title: &str) -> ContentElement {
    let now = Utc::now();
    ContentElement {
        id,
        parent_id,
        slug: format!("e-{id}"),
        title: title.to_string(),
        description: String::new(),
        content: String::new(),
        meta_title: String::new(),
        meta_description: String::new(),
        kind: String::new(),
        status: ElementStatus::Active,
        tags: String::new(),
        owner_user_id: 1,
        created_at: now,
        updated_at: now,
        deleted_at: None,
        elements: Vec::new(),
        comments: Vec::new(),
    }
}

pub(crate) fn new_element(parent_id: i64, title: &str) -> NewElement {
    NewElement {
        parent_id,
        slug: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        description: String::new(),
        content: String::new(),
        meta_title: String::new(),
        meta_description: String::new(),
        kind: "news".to_string(),
        status: "active".to_string(),
        tags: String::new(),
    }
}

pub(crate) fn admin() -> RequestContext {
    RequestContext::new("1", UserRole::Admin)
}

pub(crate) fn user(id: &str) -> RequestContext {
    RequestContext::new(id, UserRole::User)
}

pub(crate) struct Services {
    pub stores: StoreManager,
    pub elements: ElementService,
    pub comments: CommentService,
    pub tags: TagService,
}

pub(crate) fn services(test_mode: bool) -> Services {
    let stores = StoreManager::memory();
    let config = Arc::new(ContentConfig {
        default_limit: 5,
        test_mode,
    });
    let accumulator = Arc::new(TagAccumulator::new(stores.tags()));
    Services {
        elements: ElementService::new(
            stores.elements(),
            stores.comments(),
            accumulator,
            Arc::clone(&config),
        ),
        comments: CommentService::new(stores.comments(), stores.elements(), config),
        tags: TagService::new(stores.tags()),
        stores,
    }
}
