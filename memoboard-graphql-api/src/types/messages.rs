//! GraphQL types for messages

use async_graphql::{InputObject, SimpleObject, ID};
use memoboard_api_types::{MessageFields, UnifiedMessage};

/// GraphQL Message type
///
/// All three named fields are copied from the stored record; the id is the
/// same one the record is addressed by, whether seeded or generated.
#[derive(Debug, Clone, SimpleObject)]
pub struct Message {
    pub id: ID,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<UnifiedMessage> for Message {
    fn from(message: UnifiedMessage) -> Self {
        Self {
            id: ID(message.id.0),
            content: message.content,
            author: message.author,
        }
    }
}

/// Input type for creating and replacing messages
///
/// Both fields are optional and pass through unvalidated; an omitted field
/// is stored as absent.
#[derive(Debug, Clone, Default, InputObject)]
pub struct MessageInput {
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<MessageInput> for MessageFields {
    fn from(input: MessageInput) -> Self {
        Self {
            content: input.content,
            author: input.author,
        }
    }
}
