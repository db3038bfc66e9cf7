//! # contenthub-database
//!
//! Record store for ContentHub: the store traits the service layer talks
//! to, their PostgreSQL implementations, an in-memory implementation, and
//! the [`StoreManager`] that picks one from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::StoreManager;
pub use store::{CommentStore, ElementStore, TagStore};
