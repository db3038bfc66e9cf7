//! Route handlers organized by domain.

pub mod comment;
pub mod element;
pub mod health;
pub mod parents;
pub mod tag;
