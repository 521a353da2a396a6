//! Unified domain entities

use crate::ids::ApiId;
use serde::{Deserialize, Serialize};

/// Unified message entity
///
/// Both `content` and `author` are optional free-form text: the API accepts
/// and stores absent fields as-is rather than rejecting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedMessage {
    pub id: ApiId,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl UnifiedMessage {
    pub fn new(id: impl Into<ApiId>, content: Option<String>, author: Option<String>) -> Self {
        Self {
            id: id.into(),
            content,
            author,
        }
    }
}

/// Field set used to create a message or fully replace an existing one
///
/// Replacement is destructive: a `None` here means the stored field becomes
/// `None`, never "keep the old value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFields {
    pub content: Option<String>,
    pub author: Option<String>,
}
