//! Content element services: listing, CRUD and the parent tree.

pub mod filter;
pub mod service;
pub mod tree;

#[cfg(test)]
pub(crate) mod testing;

pub use filter::ElementListParams;
pub use service::{ElementService, ElementUpdate, NewElement};
pub use tree::TreeService;
