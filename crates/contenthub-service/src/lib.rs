//! # contenthub-service
//!
//! Business logic service layer for ContentHub. Each service orchestrates
//! the record stores to implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod comment;
pub mod context;
pub mod element;
pub mod tag;

pub use comment::CommentService;
pub use context::RequestContext;
pub use element::{ElementService, TreeService};
pub use tag::{TagAccumulator, TagService};
