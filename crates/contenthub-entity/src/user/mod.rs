//! User identity as seen by ContentHub.
//!
//! Accounts live in the external identity service; only the role carried in
//! the bearer token matters here.

pub mod role;

pub use role::UserRole;
