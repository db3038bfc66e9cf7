//! PostgreSQL implementations of the store traits.

pub mod comment;
pub mod element;
pub mod tag;

pub use comment::CommentRepository;
pub use element::ElementRepository;
pub use tag::TagRepository;
