//! Content element CRUD and listing.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use contenthub_core::config::ContentConfig;
use contenthub_core::error::AppError;
use contenthub_core::types::{Page, PageRequest};
use contenthub_database::{CommentStore, ElementStore};
use contenthub_entity::element::{ContentElement, CreateElement, ElementChanges, ElementStatus};

use super::filter::ElementListParams;
use crate::comment::service::attach_replies;
use crate::context::RequestContext;
use crate::tag::TagAccumulator;

/// Reported for any element id that resolves to no live row.
pub const ELEMENT_NOT_FOUND: &str = "Contentelement not found";

/// Reported when a non-owner tries to modify a row.
pub const OWNER_ONLY: &str = "Only owner can change element";

/// Request to create an element. Field presence is checked by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewElement {
    pub parent_id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub meta_title: String,
    pub meta_description: String,
    pub kind: String,
    pub status: String,
    pub tags: String,
}

/// Partial element update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementUpdate {
    pub parent_id: Option<i64>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub tags: Option<String>,
}

/// Manages content elements.
#[derive(Debug, Clone)]
pub struct ElementService {
    elements: Arc<dyn ElementStore>,
    comments: Arc<dyn CommentStore>,
    accumulator: Arc<TagAccumulator>,
    config: Arc<ContentConfig>,
}

impl ElementService {
    /// Creates a new element service.
    pub fn new(
        elements: Arc<dyn ElementStore>,
        comments: Arc<dyn CommentStore>,
        accumulator: Arc<TagAccumulator>,
        config: Arc<ContentConfig>,
    ) -> Self {
        Self {
            elements,
            comments,
            accumulator,
            config,
        }
    }

    /// Filtered listing; in tree mode each result carries its immediate
    /// children.
    pub async fn list(&self, params: &ElementListParams) -> Result<Page<ContentElement>, AppError> {
        let query = params.into_query(self.config.default_limit)?;
        let mut page = self.elements.list(&query).await?;

        if query.with_children && !page.items.is_empty() {
            let ids: Vec<i64> = page.items.iter().map(|e| e.id).collect();
            let children = self.elements.find_children(&ids).await?;
            attach_children(&mut page.items, children);
        }

        Ok(page)
    }

    /// One element with its immediate children and top-level comments.
    pub async fn get(&self, id: i64) -> Result<ContentElement, AppError> {
        let mut element = self.require(id).await?;
        element.elements = self.elements.find_children(&[id]).await?;

        let top_level = self
            .comments
            .list_top_level(id, PageRequest::unbounded(0))
            .await?;
        element.comments = attach_replies(self.comments.as_ref(), top_level.items).await?;

        Ok(element)
    }

    /// Create an element owned by the caller, then fold its tags into the
    /// tag index.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: NewElement,
    ) -> Result<ContentElement, AppError> {
        let status: ElementStatus = req.status.parse()?;
        self.require_parent(req.parent_id).await?;

        let input = CreateElement {
            parent_id: req.parent_id,
            slug: req.slug,
            title: req.title,
            description: req.description,
            content: req.content,
            meta_title: req.meta_title,
            meta_description: req.meta_description,
            kind: req.kind,
            status,
            tags: req.tags,
            owner_user_id: ctx.owner_id()?,
        };

        let element = self.elements.create(&input).await?;
        info!(
            user_id = %ctx.user_id,
            element_id = element.id,
            parent_id = element.parent_id,
            "Content element created"
        );

        // Not atomic with the insert: a failure here leaves the element stored.
        self.accumulator.apply(&element.tags).await?;

        Ok(element)
    }

    /// Partially update an element. Only its owner may do so.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        req: ElementUpdate,
    ) -> Result<ContentElement, AppError> {
        let existing = self.require(id).await?;
        if !existing.is_owned_by(&ctx.user_id) {
            return Err(AppError::forbidden(OWNER_ONLY));
        }

        let status = req
            .status
            .as_deref()
            .map(str::parse::<ElementStatus>)
            .transpose()?;

        if let Some(parent_id) = req.parent_id {
            if parent_id == id {
                return Err(AppError::validation(
                    "parent_id",
                    "An element cannot be its own parent",
                ));
            }
            self.require_parent(parent_id).await?;
        }

        let changes = ElementChanges {
            parent_id: req.parent_id,
            slug: req.slug,
            title: req.title,
            description: req.description,
            content: req.content,
            meta_title: req.meta_title,
            meta_description: req.meta_description,
            kind: req.kind,
            status,
            tags: req.tags,
        };

        let updated = self
            .elements
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found(ELEMENT_NOT_FOUND))?;

        info!(user_id = %ctx.user_id, element_id = id, "Content element updated");
        Ok(updated)
    }

    /// Delete an element: physically in test mode, soft otherwise.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<ContentElement, AppError> {
        let hard = self.config.test_mode;
        let deleted = self
            .elements
            .delete(id, hard)
            .await?
            .ok_or_else(|| AppError::not_found(ELEMENT_NOT_FOUND))?;

        info!(user_id = %ctx.user_id, element_id = id, hard, "Content element deleted");
        Ok(deleted)
    }

    async fn require(&self, id: i64) -> Result<ContentElement, AppError> {
        self.elements
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(ELEMENT_NOT_FOUND))
    }

    /// A non-zero parent must be a live element.
    async fn require_parent(&self, parent_id: i64) -> Result<(), AppError> {
        if parent_id == 0 {
            return Ok(());
        }
        match self.elements.find_by_id(parent_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::validation(
                "parent_id",
                format!("Parent element {parent_id} does not exist"),
            )),
        }
    }
}

/// Distribute id-ordered `children` into their parents' `elements`.
fn attach_children(parents: &mut [ContentElement], children: Vec<ContentElement>) {
    let mut by_parent: HashMap<i64, Vec<ContentElement>> = HashMap::new();
    for child in children {
        by_parent.entry(child.parent_id).or_default().push(child);
    }
    for parent in parents {
        parent.elements = by_parent.remove(&parent.id).unwrap_or_default();
    }
}
