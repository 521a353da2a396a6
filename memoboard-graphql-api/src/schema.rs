//! GraphQL schema definition

use async_graphql::{EmptySubscription, Schema, SchemaBuilder};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::IntoResponse};

use crate::{
    context::{GraphQLConfig, GraphQLContext},
    resolvers::{Mutation, Query},
};

/// The main GraphQL schema type
pub type MemoboardSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create the GraphQL schema with all resolvers
pub fn create_schema() -> SchemaBuilder<Query, Mutation, EmptySubscription> {
    Schema::build(Query, Mutation, EmptySubscription)
}

/// Configure the schema with limits and extensions
pub fn configure_schema(
    builder: SchemaBuilder<Query, Mutation, EmptySubscription>,
    config: &GraphQLConfig,
) -> MemoboardSchema {
    let mut schema = builder;

    if let Some(depth) = config.max_query_depth {
        schema = schema.limit_depth(depth);
    }

    if let Some(complexity) = config.max_query_complexity {
        schema = schema.limit_complexity(complexity);
    }

    if !config.enable_introspection {
        schema = schema.disable_introspection();
    }

    schema.finish()
}

/// GraphQL handler for Axum
pub async fn graphql_handler(
    State(context): State<GraphQLContext>,
    schema: axum::extract::Extension<MemoboardSchema>,
    req: GraphQLRequest,
) -> impl IntoResponse {
    let response = schema.execute(req.into_inner().data(context)).await;
    GraphQLResponse::from(response)
}

/// GraphQL playground handler for interactive exploration
pub async fn graphql_playground() -> impl IntoResponse {
    use axum::response::Html;

    let playground_html = async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    );

    Html(playground_html)
}
