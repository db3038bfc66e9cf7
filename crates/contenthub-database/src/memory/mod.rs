//! Process-local store backend.
//!
//! Rows live in `BTreeMap`s keyed by id behind a tokio `RwLock`, so
//! iteration order is ascending id. Ids come from a per-table counter
//! starting at 1. Used by tests and by `database.provider = "memory"`.

mod comment;
mod element;
mod tag;

pub use comment::MemoryCommentStore;
pub use element::MemoryElementStore;
pub use tag::MemoryTagStore;
