//! # Memoboard Interfaces
//!
//! Repository traits for the memoboard message API.
//!
//! The GraphQL layer never touches a concrete store; it is handed an
//! `Arc<dyn MessageRepository>` at construction time so tests can inject
//! isolated instances instead of sharing process-wide state.

pub mod storage;

// Re-export commonly used types
pub use storage::{MessageRepository, Repository, StorageError};
