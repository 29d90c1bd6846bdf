//! Configuration for social-graphql
//!
//! Loads settings from:
//! 1. Environment variables
//! 2. .env file (local development)
//!
//! Every setting has a default; the defaults serve the API on port 4000
//! with GraphiQL enabled.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// GraphQL configuration
    pub graphql: GraphQLConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLConfig {
    /// Serve GraphiQL on `GET /graphql`
    pub playground: bool,
    /// Max query depth
    pub max_depth: usize,
    /// Max query complexity
    pub max_complexity: usize,
    /// Enable introspection
    pub introspection: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            workers: num_cpus::get(),
        }
    }
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            playground: true,
            max_depth: 10,
            max_complexity: 1000,
            introspection: true,
        }
    }
}

/// Parsed value of `key`, or `default` when unset or unparseable
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server_defaults = ServerConfig::default();
        let graphql_defaults = GraphQLConfig::default();

        let config = Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(server_defaults.host),
                port: env_or("SERVER_PORT", server_defaults.port),
                workers: env_or("SERVER_WORKERS", server_defaults.workers),
            },
            graphql: GraphQLConfig {
                playground: env_or("GRAPHQL_PLAYGROUND", graphql_defaults.playground),
                max_depth: env_or("GRAPHQL_MAX_DEPTH", graphql_defaults.max_depth),
                max_complexity: env_or("GRAPHQL_MAX_COMPLEXITY", graphql_defaults.max_complexity),
                introspection: env_or("GRAPHQL_INTROSPECTION", graphql_defaults.introspection),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.server.workers > 0, "SERVER_WORKERS must be > 0");
        ensure!(self.graphql.max_depth > 0, "GRAPHQL_MAX_DEPTH must be > 0");
        ensure!(
            self.graphql.max_complexity > 0,
            "GRAPHQL_MAX_COMPLEXITY must be > 0"
        );
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
