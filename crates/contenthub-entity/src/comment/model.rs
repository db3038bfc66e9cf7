//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment on a content element. Replies point at their parent through
/// `parent_comment_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Auto-assigned identifier.
    pub id: i64,
    /// Comment body.
    pub text: String,
    /// The user who wrote the comment.
    pub owner_user_id: i64,
    /// Parent comment ID (`0` for top-level comments).
    pub parent_comment_id: i64,
    /// The element this comment belongs to.
    pub content_element_id: i64,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Loaded direct replies.
    #[sqlx(skip)]
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Check if this is a top-level comment.
    pub fn is_top_level(&self) -> bool {
        self.parent_comment_id == 0
    }

    /// Check whether `user_id`, as carried in the identity header, wrote
    /// this comment.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_user_id.to_string() == user_id
    }
}

/// Data required to create a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub text: String,
    pub owner_user_id: i64,
    pub parent_comment_id: i64,
    pub content_element_id: i64,
}

/// A partial comment update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentChanges {
    pub text: Option<String>,
}

impl CommentChanges {
    /// Write the present fields into `comment`.
    pub fn apply_to(&self, comment: &mut Comment) {
        if let Some(ref text) = self.text {
            comment.text = text.clone();
        }
    }
}
