//! Request DTOs with validation.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use contenthub_service::comment::{CommentUpdate, NewComment};
use contenthub_service::element::{ElementUpdate, NewElement};

/// Slugs end up in URLs.
fn validate_ascii(value: &str) -> Result<(), ValidationError> {
    if value.is_ascii() {
        Ok(())
    } else {
        Err(ValidationError::new("ascii")
            .with_message(Cow::Borrowed("Slug must contain only ASCII characters")))
    }
}

/// Create content element request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateElementRequest {
    /// `0` for a root element.
    pub parent_id: i64,
    #[validate(
        length(min = 1, message = "Slug is required"),
        custom(function = "validate_ascii")
    )]
    pub slug: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: String,
    pub content: String,
    pub meta_title: String,
    pub meta_description: String,
    pub kind: String,
    /// One of `active`, `suspend`, `draft`.
    #[validate(required(message = "Status is required"))]
    pub status: Option<String>,
    /// Comma-separated tag names.
    pub tags: String,
}

impl From<CreateElementRequest> for NewElement {
    fn from(req: CreateElementRequest) -> Self {
        Self {
            parent_id: req.parent_id,
            slug: req.slug,
            title: req.title,
            description: req.description,
            content: req.content,
            meta_title: req.meta_title,
            meta_description: req.meta_description,
            kind: req.kind,
            status: req.status.unwrap_or_default(),
            tags: req.tags,
        }
    }
}

/// Partial element update body. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateElementRequest {
    pub parent_id: Option<i64>,
    #[validate(
        length(min = 1, message = "Slug must not be empty"),
        custom(function = "validate_ascii")
    )]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub tags: Option<String>,
}

impl From<UpdateElementRequest> for ElementUpdate {
    fn from(req: UpdateElementRequest) -> Self {
        Self {
            parent_id: req.parent_id,
            slug: req.slug,
            title: req.title,
            description: req.description,
            content: req.content,
            meta_title: req.meta_title,
            meta_description: req.meta_description,
            kind: req.kind,
            status: req.status,
            tags: req.tags,
        }
    }
}

/// Add comment request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    /// `0` for a top-level comment.
    pub parent_comment_id: i64,
}

impl From<CreateCommentRequest> for NewComment {
    fn from(req: CreateCommentRequest) -> Self {
        Self {
            text: req.text,
            parent_comment_id: req.parent_comment_id,
        }
    }
}

/// Edit comment request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: Option<String>,
}

impl From<UpdateCommentRequest> for CommentUpdate {
    fn from(req: UpdateCommentRequest) -> Self {
        Self { text: req.text }
    }
}

/// `GET /contenttags` query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagListQuery {
    /// `id`, `name` or `weight`, `-` prefix for descending.
    pub sort: Option<String>,
}
