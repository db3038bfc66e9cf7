//! Minimum-role enforcement for protected routes.

use contenthub_core::error::AppError;
use contenthub_entity::user::UserRole;

/// Checks a caller's role against the role a route requires.
///
/// Role hierarchy: Admin > User, so admins pass user routes.
#[derive(Debug, Clone, Copy)]
pub struct RoleGuard {
    minimum: UserRole,
}

impl RoleGuard {
    /// Guard requiring at least `minimum`.
    pub fn new(minimum: UserRole) -> Self {
        Self { minimum }
    }

    /// The role this guard requires.
    pub fn minimum(&self) -> UserRole {
        self.minimum
    }

    /// Returns `Ok(())` if allowed, or an access-denied error.
    pub fn check(&self, actual: UserRole) -> Result<(), AppError> {
        if actual.has_at_least(&self.minimum) {
            Ok(())
        } else {
            Err(AppError::access_denied(format!(
                "Role '{actual}' is insufficient; minimum required: '{}'",
                self.minimum
            )))
        }
    }
}
