//! `CurrentUser` extractor: reads the identity headers set by the protect
//! middleware into a [`RequestContext`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use contenthub_core::error::AppError;
use contenthub_entity::user::UserRole;
use contenthub_service::context::RequestContext;

use crate::error::ApiError;
use crate::middleware::auth::{USER_ID_HEADER, USER_ROLE_HEADER};

/// Authenticated caller available in handlers behind the protect middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestContext);

impl CurrentUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::unauthenticated(format!("Missing {name} header")))
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(parts, USER_ID_HEADER)?;
        let role: UserRole = header(parts, USER_ROLE_HEADER)?
            .parse()
            .map_err(|_| AppError::unauthenticated("Invalid role header"))?;

        Ok(CurrentUser(RequestContext::new(user_id, role)))
    }
}
