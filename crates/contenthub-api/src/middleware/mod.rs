//! Axum middleware stack.

pub mod auth;
pub mod compression;
pub mod cors;
pub mod logging;

pub use auth::{ProtectState, protect};
