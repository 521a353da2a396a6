//! GraphQL resolvers

pub mod mutation;
pub mod query;

// Re-export all resolvers
pub use mutation::*;
pub use query::*;
