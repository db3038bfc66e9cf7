//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use contenthub_core::error::AppError;
use contenthub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the API layer from the identity headers the protect middleware
/// sets, and passed into service methods so that every write knows *who*
/// is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The user id exactly as carried in the identity header.
    pub user_id: String,
    /// The caller's role.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// The caller's id as a row owner.
    pub fn owner_id(&self) -> Result<i64, AppError> {
        self.user_id
            .parse()
            .map_err(|_| AppError::unauthenticated("Identity header is not a numeric user id"))
    }
}
