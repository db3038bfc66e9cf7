//! Role-based route protection.

pub mod guard;

pub use guard::RoleGuard;
