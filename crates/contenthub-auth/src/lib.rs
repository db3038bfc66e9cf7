//! # contenthub-auth
//!
//! Bearer token handling for ContentHub. Tokens are issued by an external
//! identity service and verified here with a shared HMAC secret.
//!
//! ## Modules
//!
//! - `jwt`: claims, token minting for development, and verification
//! - `rbac`: minimum-role checks for protected routes

pub mod jwt;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use rbac::RoleGuard;
