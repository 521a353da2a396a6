//! GraphQL error handling using unified error types

use memoboard_api_types::ApiError;
use memoboard_interfaces::StorageError;
use thiserror::Error;

/// GraphQL-specific error wrapper for external errors
#[derive(Error, Debug)]
pub enum GraphQLError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<GraphQLError> for ApiError {
    fn from(error: GraphQLError) -> Self {
        match error {
            GraphQLError::Storage(StorageError::NotFound { id }) => {
                ApiError::not_found(format!("Message {}", id))
            }
            GraphQLError::Storage(e) => ApiError::internal_error(format!("Storage error: {}", e)),
        }
    }
}

/// Map a storage failure into the unified API error shape
pub(crate) fn storage_error(error: StorageError) -> ApiError {
    ApiError::from(GraphQLError::Storage(error))
}

/// Result type for GraphQL operations using unified error types
pub type Result<T> = std::result::Result<T, ApiError>;
