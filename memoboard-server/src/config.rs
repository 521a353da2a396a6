//! Server configuration

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Complete server configuration combining all subsystems
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server: HttpServerConfig,
    pub graphql_api: GraphQLApiConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    pub bind_address: SocketAddr,
    pub enable_tracing: bool,
}

/// GraphQL API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLApiConfig {
    pub endpoint: String,
    pub enable_playground: bool,
    pub enable_introspection: bool,
    pub max_query_depth: Option<usize>,
    pub max_query_complexity: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub enable_file_logging: bool,
    pub file_path: Option<String>,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Start with the two demo records instead of an empty store
    pub seed_demo_messages: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            graphql_api: GraphQLApiConfig::default(),
            logging: LoggingConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:4000".parse().expect("valid default address"),
            enable_tracing: true,
        }
    }
}

impl Default for GraphQLApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "/graphql".to_string(),
            enable_playground: true,
            enable_introspection: true,
            max_query_depth: Some(15),
            max_query_complexity: Some(1000),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_file_logging: false,
            file_path: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_demo_messages: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_server() {
        let config = ServerConfig::default();
        assert_eq!(config.server.bind_address.port(), 4000);
        assert_eq!(config.graphql_api.endpoint, "/graphql");
        assert!(config.graphql_api.enable_playground);
        assert!(config.storage.seed_demo_messages);
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let config = ServerConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ServerConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.server.bind_address, config.server.bind_address);
        assert_eq!(parsed.graphql_api.endpoint, config.graphql_api.endpoint);
    }
}
