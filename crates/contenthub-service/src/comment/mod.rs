//! Comment services.

pub mod service;

pub use service::{CommentListParams, CommentService, CommentUpdate, NewComment};
