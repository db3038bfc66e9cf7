//! Protect middleware: bearer token verification and role checks.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use contenthub_auth::{JwtDecoder, RoleGuard};
use contenthub_core::error::AppError;
use contenthub_entity::user::UserRole;

use crate::error::ApiError;

/// Caller's numeric user id, set for handlers behind [`protect`].
pub const USER_ID_HEADER: &str = "x-user-id";
/// Caller's role, set for handlers behind [`protect`].
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// State for one protected route group.
#[derive(Debug, Clone)]
pub struct ProtectState {
    decoder: Arc<JwtDecoder>,
    guard: RoleGuard,
}

impl ProtectState {
    /// Require at least `minimum` on every route of the group.
    pub fn new(decoder: Arc<JwtDecoder>, minimum: UserRole) -> Self {
        Self {
            decoder,
            guard: RoleGuard::new(minimum),
        }
    }
}

fn bearer_token(request: &Request) -> Result<&str, AppError> {
    let value = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?;

    value
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))
}

/// Rejects requests without a valid bearer token of sufficient role, and
/// replaces any client-supplied identity headers with the token's.
pub async fn protect(
    State(protect): State<ProtectState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let headers = request.headers_mut();
    headers.remove(USER_ID_HEADER);
    headers.remove(USER_ROLE_HEADER);

    let path = request.uri().path().to_string();
    let claims = bearer_token(&request)
        .and_then(|token| protect.decoder.decode(token))
        .inspect_err(|e| warn!(path = %path, reason = %e.message, "Rejected bearer token"))?;

    protect.guard.check(claims.role).inspect_err(|_| {
        warn!(
            path = %path,
            user_id = claims.sub,
            role = %claims.role,
            required = %protect.guard.minimum(),
            "Insufficient role"
        )
    })?;

    let headers = request.headers_mut();
    headers.insert(USER_ID_HEADER, HeaderValue::from(claims.sub));
    headers.insert(
        USER_ROLE_HEADER,
        HeaderValue::from_static(claims.role.as_str()),
    );

    Ok(next.run(request).await)
}
