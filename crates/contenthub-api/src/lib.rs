//! # contenthub-api
//!
//! HTTP API layer for ContentHub built on Axum.
//!
//! Provides the REST endpoints for content elements, comments, tags and the
//! parent listing, the protect middleware, extractors, DTOs, and the
//! `{data, errors, count}` response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
