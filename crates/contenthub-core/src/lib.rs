//! # contenthub-core
//!
//! Core crate for ContentHub. Contains configuration schemas, the unified
//! error system, and the pagination/sorting primitives shared by the store
//! backends and the service layer.
//!
//! This crate has **no** internal dependencies on other ContentHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
