//! Content element entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::ElementStatus;
use crate::comment::Comment;

/// A node in the category/article tree.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentElement {
    /// Auto-assigned identifier.
    pub id: i64,
    /// Parent element ID (`0` for root elements).
    pub parent_id: i64,
    /// URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Body text.
    pub content: String,
    /// HTML `<title>` override.
    pub meta_title: String,
    /// HTML meta description.
    pub meta_description: String,
    /// Free-form element kind (e.g. `category`, `news`).
    pub kind: String,
    /// Publication status.
    pub status: ElementStatus,
    /// Comma-joined tag names.
    pub tags: String,
    /// The user who created the element.
    pub owner_user_id: i64,
    /// When the element was created.
    pub created_at: DateTime<Utc>,
    /// When the element was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Loaded child elements.
    #[sqlx(skip)]
    #[serde(default)]
    pub elements: Vec<ContentElement>,
    /// Loaded top-level comments.
    #[sqlx(skip)]
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl ContentElement {
    /// Check if this is a root element.
    pub fn is_root(&self) -> bool {
        self.parent_id == 0
    }

    /// Check whether `user_id`, as carried in the identity header, owns
    /// this element. The comparison is textual.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_user_id.to_string() == user_id
    }
}

/// Data required to create a new element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateElement {
    /// Parent element (`0` for root).
    pub parent_id: i64,
    /// URL slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Body text.
    pub content: String,
    /// HTML `<title>` override.
    pub meta_title: String,
    /// HTML meta description.
    pub meta_description: String,
    /// Element kind.
    pub kind: String,
    /// Publication status.
    pub status: ElementStatus,
    /// Comma-joined tag names.
    pub tags: String,
    /// The creating user.
    pub owner_user_id: i64,
}

/// A partial update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementChanges {
    pub parent_id: Option<i64>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub kind: Option<String>,
    pub status: Option<ElementStatus>,
    pub tags: Option<String>,
}

impl ElementChanges {
    /// Whether the update touches nothing.
    pub fn is_empty(&self) -> bool {
        self.parent_id.is_none()
            && self.slug.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.meta_title.is_none()
            && self.meta_description.is_none()
            && self.kind.is_none()
            && self.status.is_none()
            && self.tags.is_none()
    }

    /// Write the present fields into `element`.
    pub fn apply_to(&self, element: &mut ContentElement) {
        if let Some(parent_id) = self.parent_id {
            element.parent_id = parent_id;
        }
        if let Some(ref slug) = self.slug {
            element.slug = slug.clone();
        }
        if let Some(ref title) = self.title {
            element.title = title.clone();
        }
        if let Some(ref description) = self.description {
            element.description = description.clone();
        }
        if let Some(ref content) = self.content {
            element.content = content.clone();
        }
        if let Some(ref meta_title) = self.meta_title {
            element.meta_title = meta_title.clone();
        }
        if let Some(ref meta_description) = self.meta_description {
            element.meta_description = meta_description.clone();
        }
        if let Some(ref kind) = self.kind {
            element.kind = kind.clone();
        }
        if let Some(status) = self.status {
            element.status = status;
        }
        if let Some(ref tags) = self.tags {
            element.tags = tags.clone();
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(id: i64, parent_id: i64, title: &str) -> ContentElement {
    let now = Utc::now();
    ContentElement {
        id,
        parent_id,
        slug: format!("element-{id}"),
        title: title.to_string(),
        description: String::new(),
        content: String::new(),
        meta_title: String::new(),
        meta_description: String::new(),
        kind: "news".to_string(),
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
