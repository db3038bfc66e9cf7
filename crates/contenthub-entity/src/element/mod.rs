//! Content element domain entities.

pub mod model;
pub mod query;
pub mod status;
pub mod tree;

pub use model::{ContentElement, CreateElement, ElementChanges};
pub use query::{
    ElementQuery, ElementSort, ElementSortColumn, ParentScope, TextFilter, compare_text,
};
pub use status::ElementStatus;
pub use tree::ParentListEntry;
