//! # contenthub-entity
//!
//! Domain entity models for ContentHub. Every struct in this crate
//! represents a database table row or a domain value object. Row entities
//! derive `sqlx::FromRow`; the typed list queries live next to the entity
//! they filter.

pub mod comment;
pub mod element;
pub mod tag;
pub mod user;
