//! GraphQL API implementation for the memoboard message store
//!
//! This crate provides the GraphQL API layer built on top of the
//! memoboard-interfaces trait system, enabling flexible dependency injection
//! and testing.

pub mod context;
pub mod errors;
pub mod resolvers;
pub mod schema;
pub mod types;

// Re-export main components
pub use context::*;
pub use errors::*;
pub use resolvers::*;
pub use schema::*;
pub use types::*;
