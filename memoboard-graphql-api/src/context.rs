//! GraphQL context types for dependency injection

use memoboard_interfaces::MessageRepository;
use std::sync::Arc;

/// Main GraphQL context carrying the injected message store
#[derive(Clone)]
pub struct GraphQLContext {
    pub messages: Arc<dyn MessageRepository>,
}

impl GraphQLContext {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }
}

/// Configuration for GraphQL setup
#[derive(Debug, Clone)]
pub struct GraphQLConfig {
    pub enable_playground: bool,
    pub enable_introspection: bool,
    pub max_query_depth: Option<usize>,
    pub max_query_complexity: Option<usize>,
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            enable_playground: true,
            enable_introspection: true,
            max_query_depth: Some(15),
            max_query_complexity: Some(1000),
        }
    }
}
