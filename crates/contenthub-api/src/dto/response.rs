//! Response DTOs.

use serde::{Deserialize, Serialize};

use contenthub_core::error::AppError;
use contenthub_core::types::Page;

/// One entry of the envelope's `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Request field (or `ID`, `json`, `auth`) the error concerns.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl From<&AppError> for FieldError {
    fn from(err: &AppError) -> Self {
        Self {
            field: err.field_name().to_string(),
            message: err.message.clone(),
        }
    }
}

/// Standard response envelope.
///
/// `data` is `null` whenever `errors` is non-empty. `count` is only present
/// on list endpoints and carries the pre-pagination total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response payload.
    pub data: Option<T>,
    /// Domain errors; empty on success.
    pub errors: Vec<FieldError>,
    /// Total matching rows, list endpoints only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
            count: None,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Creates a list response from a page of rows.
    pub fn page(page: Page<T>) -> Self {
        Self {
            data: Some(page.items),
            errors: Vec::new(),
            count: Some(page.total),
        }
    }
}

impl ApiResponse<()> {
    /// Creates an error-only response.
    pub fn error(err: &AppError) -> Self {
        Self {
            data: None,
            errors: vec![FieldError::from(err)],
            count: None,
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Whether the record store answered.
    pub store: bool,
}
