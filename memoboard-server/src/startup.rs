//! Server startup and shutdown logic

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use memoboard_graphql_api::{
    context::GraphQLConfig,
    schema::{configure_schema, create_schema, graphql_handler, graphql_playground},
};

use crate::{config::ServerConfig, services::ServiceContainer};

/// Server application struct
pub struct Server {
    config: ServerConfig,
    services: ServiceContainer,
}

impl Server {
    /// Create a new server instance
    pub async fn new(config: ServerConfig) -> Result<Self> {
        // Initialize logging first
        crate::services::init_logging(&config).await?;

        let services = ServiceContainer::new(&config);

        Ok(Self { config, services })
    }

    /// Build the complete application router
    pub fn build_app(&self) -> Router {
        let graphql_config = GraphQLConfig {
            enable_playground: self.config.graphql_api.enable_playground,
            enable_introspection: self.config.graphql_api.enable_introspection,
            max_query_depth: self.config.graphql_api.max_query_depth,
            max_query_complexity: self.config.graphql_api.max_query_complexity,
        };
        let schema = configure_schema(create_schema(), &graphql_config);

        let graphql_routes = Router::new()
            .route(&self.config.graphql_api.endpoint, post(graphql_handler))
            .layer(Extension(schema))
            .with_state(self.services.graphql_context());

        let mut app = Router::new()
            .route("/", get(root_handler))
            .with_state(self.services.clone())
            .merge(graphql_routes);

        if self.config.graphql_api.enable_playground {
            app = app.route("/playground", get(graphql_playground));
        }

        if self.config.server.enable_tracing {
            app = app.layer(TraceLayer::new_for_http());
        }

        app
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let app = self.build_app();
        let addr = self.config.server.bind_address;

        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!(
            "Running GraphQL API server at http://{}{}",
            addr,
            self.config.graphql_api.endpoint
        );
        if self.config.graphql_api.enable_playground {
            tracing::info!("GraphQL playground available at http://{}/playground", addr);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Root health endpoint
async fn root_handler(State(services): State<ServiceContainer>) -> impl IntoResponse {
    match services.messages.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"service": "memoboard", "status": "healthy"})),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"service": "memoboard", "status": "unhealthy", "error": e.to_string()})),
        ),
    }
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
