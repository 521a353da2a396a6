//! In-memory storage for the memoboard message API
//!
//! The store here is deliberately non-persistent: records live for the
//! process lifetime only, matching the demonstration scope of the API.

pub mod memory;

pub use memory::InMemoryMessageStore;
