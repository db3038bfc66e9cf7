//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use contenthub_core::error::{AppError, ErrorKind};

use crate::dto::ApiResponse;

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return `Result<_, ApiError>` and use `?` on service calls;
/// the `From` impl does the conversion.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code for this error's kind.
    ///
    /// Domain failures keep `200 OK` and report through the envelope's
    /// `errors` array.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::NotFound
            | ErrorKind::Validation
            | ErrorKind::MalformedInput
            | ErrorKind::Forbidden => StatusCode::OK,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::AccessDenied => StatusCode::FORBIDDEN,
            ErrorKind::Database | ErrorKind::Internal | ErrorKind::Configuration => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(
                kind = %self.0.kind,
                error = %self.0.message,
                source = ?self.0.source,
                "Request failed"
            );
        }

        (status, Json(ApiResponse::error(&self.0))).into_response()
    }
}
