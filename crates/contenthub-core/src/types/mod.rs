//! Query primitives shared by the store backends and services.

pub mod pagination;
pub mod sorting;

pub use pagination::{Page, PageRequest};
pub use sorting::SortDirection;
