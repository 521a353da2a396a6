//! Message repository interfaces
//!
//! These traits define the contract between the API layer and whatever holds
//! the message records, so the store stays an injectable dependency.

use async_trait::async_trait;
use memoboard_api_types::{ApiId, MessageFields, UnifiedMessage};

/// Common storage error type
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("message not found: {id}")]
    NotFound { id: String },

    #[error("internal storage error: {message}")]
    Internal { message: String },
}

impl StorageError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Base repository trait with health check capability
#[async_trait]
pub trait Repository: Send + Sync {
    /// Check if the repository is healthy and can serve requests
    async fn health_check(&self) -> Result<(), StorageError>;
}

/// Repository contract for message records
///
/// Implementations must serialize access internally: concurrent `create`
/// calls may never lose a write.
#[async_trait]
pub trait MessageRepository: Repository {
    /// Find a message by id, `None` if no record carries it
    async fn find_by_id(&self, id: &ApiId) -> Result<Option<UnifiedMessage>, StorageError>;

    /// All messages in insertion order; empty when the store is empty
    async fn find_all(&self) -> Result<Vec<UnifiedMessage>, StorageError>;

    /// Append a new message with a freshly generated id
    async fn create(&self, fields: MessageFields) -> Result<UnifiedMessage, StorageError>;

    /// Fully replace the fields of an existing message
    ///
    /// The record keeps its id; every other field is overwritten with the
    /// given replacement. Fails with [`StorageError::NotFound`] when no
    /// record carries the id.
    async fn replace(
        &self,
        id: &ApiId,
        fields: MessageFields,
    ) -> Result<UnifiedMessage, StorageError>;

    /// Total number of stored messages
    async fn count(&self) -> Result<u64, StorageError>;
}
