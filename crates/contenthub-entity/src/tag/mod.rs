//! Tag index entities.

pub mod model;

pub use model::{Tag, TagSort, TagSortColumn};
