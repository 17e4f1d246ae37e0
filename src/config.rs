//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database URL (default: `sqlite://albums.db?mode=rwc`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default suitable for a local run, so loading
    /// cannot fail; malformed numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://albums.db?mode=rwc".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        }
    }
}
