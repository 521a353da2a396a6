//! GraphQL type definitions

pub mod messages;

// Re-export all types
pub use messages::*;
