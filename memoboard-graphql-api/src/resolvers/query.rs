//! GraphQL query resolvers

use async_graphql::{Context, Object, Result, ID};
use memoboard_api_types::{ApiError, ApiId};

use crate::{context::GraphQLContext, errors::storage_error, types::Message};

/// Root query resolver
pub struct Query;

#[Object]
impl Query {
    /// Get all messages; the id argument is accepted but not used to filter
    async fn get_messages(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "id")] _id: Option<ID>,
    ) -> Result<Option<Vec<Option<Message>>>> {
        let context = ctx.data::<GraphQLContext>()?;

        let messages = context
            .messages
            .find_all()
            .await
            .map_err(storage_error)?;

        Ok(Some(messages.into_iter().map(|m| Some(m.into())).collect()))
    }

    /// Get a single message by ID
    async fn get_message(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Message>> {
        let context = ctx.data::<GraphQLContext>()?;
        let message_id = ApiId::from_string(id.as_str());

        match context
            .messages
            .find_by_id(&message_id)
            .await
            .map_err(storage_error)?
        {
            Some(message) => Ok(Some(message.into())),
            None => Err(ApiError::not_found(format!("Message {}", message_id)).into()),
        }
    }
}
