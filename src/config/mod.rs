/// Configuration management for the project tracker
///
/// Handles server bind settings and the location of the SQLite database.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// SQLite database location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the database file (default: "projects.db"), created if missing
    pub path: PathBuf,
}

impl Default for Config {
    /// Default configuration with ENV_VAR overrides for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("PROJECT_TRACKER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PROJECT_TRACKER_PORT")
                    .unwrap_or_else(|_| "3004".to_string())
                    .parse()
                    .unwrap_or(3004),
            },
            database: DatabaseConfig {
                path: std::env::var("PROJECT_TRACKER_DB_PATH")
                    .unwrap_or_else(|_| "projects.db".to_string())
                    .into(),
            },
        }
    }
}
