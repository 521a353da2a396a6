//! Unified API types for the memoboard message API
//!
//! This crate provides the type definitions shared between the storage layer
//! and the GraphQL API layer, keeping both sides of the repository seam on a
//! single vocabulary.

pub mod domain;
pub mod errors;
pub mod ids;

// Re-export main types for convenience
pub use domain::{MessageFields, UnifiedMessage};
pub use errors::{ApiError, ApiResult};
pub use ids::ApiId;
