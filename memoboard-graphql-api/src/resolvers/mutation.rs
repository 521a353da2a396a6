//! GraphQL mutation resolvers

use async_graphql::{Context, Object, Result, ID};
use memoboard_api_types::{ApiId, MessageFields};

use crate::{context::GraphQLContext, errors::storage_error, types::{Message, MessageInput}};

/// Root mutation resolver
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a new message with a freshly generated id
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: Option<MessageInput>,
    ) -> Result<Option<Message>> {
        let context = ctx.data::<GraphQLContext>()?;

        // A null input is treated as an empty one; nothing is validated here
        let fields = input.map(MessageFields::from).unwrap_or_default();

        let created = context
            .messages
            .create(fields)
            .await
            .map_err(storage_error)?;

        tracing::debug!(id = %created.id, "created message");
        Ok(Some(created.into()))
    }

    /// Fully replace an existing message's fields
    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<MessageInput>,
    ) -> Result<Option<Message>> {
        let context = ctx.data::<GraphQLContext>()?;
        let message_id = ApiId::from_string(id.as_str());
        let fields = input.map(MessageFields::from).unwrap_or_default();

        let updated = context
            .messages
            .replace(&message_id, fields)
            .await
            .map_err(storage_error)?;

        tracing::debug!(id = %updated.id, "replaced message");
        Ok(Some(updated.into()))
    }
}
