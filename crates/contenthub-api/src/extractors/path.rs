//! Typed path parameter helpers.

use contenthub_core::error::AppError;

/// Parses a numeric row id from a path segment. `field` names the segment in
/// the error entry.
pub fn parse_id(raw: &str, field: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::validation(field, format!("Invalid {field}: '{raw}'")))
}
