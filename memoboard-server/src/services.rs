//! Service implementations and dependency injection setup

use anyhow::Result;
use std::sync::Arc;

use memoboard_graphql_api::context::GraphQLContext;
use memoboard_interfaces::MessageRepository;
use memoboard_storage::InMemoryMessageStore;

use crate::config::ServerConfig;

/// Service container holding all application services
#[derive(Clone)]
pub struct ServiceContainer {
    pub messages: Arc<dyn MessageRepository>,
}

impl ServiceContainer {
    /// Create a new service container with the configured store
    pub fn new(config: &ServerConfig) -> Self {
        let store = if config.storage.seed_demo_messages {
            InMemoryMessageStore::with_seed_messages()
        } else {
            InMemoryMessageStore::new()
        };

        Self {
            messages: Arc::new(store),
        }
    }

    /// Build the GraphQL context over the container's services
    pub fn graphql_context(&self) -> GraphQLContext {
        GraphQLContext::new(self.messages.clone())
    }
}

/// Initialize the logging system
pub async fn init_logging(config: &ServerConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false));

    if config.logging.enable_file_logging {
        if let Some(file_path) = &config.logging.file_path {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)?;

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false);

            let subscriber = subscriber.with(file_layer);
            // try_init avoids a panic when a global subscriber is already set
            if subscriber.try_init().is_err() {
                tracing::debug!("global tracing subscriber already initialized, skipping");
            }
            return Ok(());
        }
    }

    if subscriber.try_init().is_err() {
        tracing::debug!("global tracing subscriber already initialized, skipping");
    }

    Ok(())
}
