//! Memoboard server library
//!
//! Wires the GraphQL message API to an axum HTTP server with configuration,
//! logging, and graceful shutdown.

pub mod config;
pub mod services;
pub mod startup;

pub use config::ServerConfig;
pub use startup::Server;
