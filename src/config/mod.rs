//! Configuration module for the festival backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Whether to insert the default admin login, accommodation units and
    /// till products into empty tables at startup
    pub seed_defaults: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("BEDLAM_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("BEDLAM_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid BEDLAM_BIND_ADDR format");

        let log_level = env::var("BEDLAM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_defaults = env::var("BEDLAM_SEED_DEFAULTS")
            .map(|v| v != "0" && v.to_lowercase() != "false")
            .unwrap_or(true);

        Self {
            db_path,
            bind_addr,
            log_level,
            seed_defaults,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("BEDLAM_DB_PATH");
        env::remove_var("BEDLAM_BIND_ADDR");
        env::remove_var("BEDLAM_LOG_LEVEL");
        env::remove_var("BEDLAM_SEED_DEFAULTS");

        let config = Config::from_env();

        assert_eq!(config.db_path, PathBuf::from("./data/app.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_defaults);
    }
}
