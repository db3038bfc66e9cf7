//! Comment CRUD scoped to one content element.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use contenthub_core::config::ContentConfig;
use contenthub_core::error::AppError;
use contenthub_core::types::{Page, PageRequest};
use contenthub_database::{CommentStore, ElementStore};
use contenthub_entity::comment::{Comment, CommentChanges, CreateComment};

use crate::context::RequestContext;
use crate::element::filter::parse_count;
use crate::element::service::{ELEMENT_NOT_FOUND, OWNER_ONLY};

/// Reported for a comment id that resolves to no live row of the element.
pub const COMMENT_NOT_FOUND: &str = "Comment not found";

/// Raw `GET /contentelements/{id}/comments` parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl CommentListParams {
    /// Resolve the page window. Without `limit` every comment is returned.
    pub fn page(&self) -> Result<PageRequest, AppError> {
        let present = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        let limit = parse_count("limit", present(&self.limit).as_deref())?;
        let offset = parse_count("offset", present(&self.offset).as_deref())?.unwrap_or(0);
        Ok(PageRequest { limit, offset })
    }
}

/// Request to add a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewComment {
    pub text: String,
    /// `0` for a top-level comment.
    pub parent_comment_id: i64,
}

/// Partial comment update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentUpdate {
    pub text: Option<String>,
}

/// Manages comments on content elements.
#[derive(Debug, Clone)]
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    elements: Arc<dyn ElementStore>,
    config: Arc<ContentConfig>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        comments: Arc<dyn CommentStore>,
        elements: Arc<dyn ElementStore>,
        config: Arc<ContentConfig>,
    ) -> Self {
        Self {
            comments,
            elements,
            config,
        }
    }

    /// Top-level comments of an element, each with its direct replies.
    pub async fn list(
        &self,
        element_id: i64,
        params: &CommentListParams,
    ) -> Result<Page<Comment>, AppError> {
        let page = params.page()?;
        self.require_element(element_id).await?;

        let top_level = self.comments.list_top_level(element_id, page).await?;
        let items = attach_replies(self.comments.as_ref(), top_level.items).await?;
        Ok(Page::new(items, top_level.total))
    }

    /// Add a comment written by the caller.
    pub async fn add(
        &self,
        ctx: &RequestContext,
        element_id: i64,
        req: NewComment,
    ) -> Result<Comment, AppError> {
        self.require_element(element_id).await?;

        if req.parent_comment_id != 0 {
            let parent = self.comments.find_by_id(req.parent_comment_id).await?;
            if !parent.is_some_and(|p| p.content_element_id == element_id) {
                return Err(AppError::validation(
                    "parent_comment_id",
                    format!(
                        "Comment {} does not exist on this element",
                        req.parent_comment_id
                    ),
                ));
            }
        }

        let input = CreateComment {
            text: req.text,
            owner_user_id: ctx.owner_id()?,
            parent_comment_id: req.parent_comment_id,
            content_element_id: element_id,
        };
        let comment = self.comments.create(&input).await?;

        info!(
            user_id = %ctx.user_id,
            element_id,
            comment_id = comment.id,
            "Comment added"
        );
        Ok(comment)
    }

    /// Edit a comment. Only its author may do so.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        element_id: i64,
        comment_id: i64,
        req: CommentUpdate,
    ) -> Result<Comment, AppError> {
        self.require_owned(ctx, element_id, comment_id).await?;

        let changes = CommentChanges { text: req.text };
        let updated = self
            .comments
            .update(comment_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found(COMMENT_NOT_FOUND))?;

        info!(user_id = %ctx.user_id, comment_id, "Comment updated");
        Ok(updated)
    }

    /// Delete a comment. Only its author may do so.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        element_id: i64,
        comment_id: i64,
    ) -> Result<Comment, AppError> {
        self.require_owned(ctx, element_id, comment_id).await?;

        let hard = self.config.test_mode;
        let deleted = self
            .comments
            .delete(comment_id, hard)
            .await?
            .ok_or_else(|| AppError::not_found(COMMENT_NOT_FOUND))?;

        info!(user_id = %ctx.user_id, comment_id, hard, "Comment deleted");
        Ok(deleted)
    }

    async fn require_element(&self, element_id: i64) -> Result<(), AppError> {
        match self.elements.find_by_id(element_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(ELEMENT_NOT_FOUND)),
        }
    }

    async fn require_owned(
        &self,
        ctx: &RequestContext,
        element_id: i64,
        comment_id: i64,
    ) -> Result<Comment, AppError> {
        self.require_element(element_id).await?;

        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.content_element_id == element_id)
            .ok_or_else(|| AppError::not_found(COMMENT_NOT_FOUND))?;

        if !comment.is_owned_by(&ctx.user_id) {
            return Err(AppError::forbidden(OWNER_ONLY));
        }
        Ok(comment)
    }
}

/// Load one level of replies under each of `top_level`.
pub(crate) async fn attach_replies(
    store: &dyn CommentStore,
    mut top_level: Vec<Comment>,
) -> Result<Vec<Comment>, AppError> {
    if top_level.is_empty() {
        return Ok(top_level);
    }
    let ids: Vec<i64> = top_level.iter().map(|c| c.id).collect();

    let mut by_parent: HashMap<i64, Vec<Comment>> = HashMap::new();
    for reply in store.find_replies(&ids).await? {
        by_parent.entry(reply.parent_comment_id).or_default().push(reply);
    }
    for comment in &mut top_level {
        comment.replies = by_parent.remove(&comment.id).unwrap_or_default();
    }
    Ok(top_level)
}
