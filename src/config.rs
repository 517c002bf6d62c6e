//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path of the JSON dataset
    pub data_path: PathBuf,
    /// Maximum snapshot age in seconds before a reload is attempted
    pub cache_ttl: u64,
    /// Deployment environment name, reported by the health endpoint
    pub environment: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port, falling back to `PORT` (default: 3000)
    /// - `DATA_PATH` - Dataset file (default: data/catalog.json)
    /// - `CACHE_TTL` - Snapshot lifetime in seconds (default: 300)
    /// - `APP_ENV` - Environment name (default: development)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT")
                .or_else(|| parse_var("PORT"))
                .unwrap_or(defaults.server_port),
            data_path: env::var("DATA_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            environment: env::var("APP_ENV")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.environment),
        }
    }

    /// Snapshot lifetime as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            data_path: PathBuf::from("data/catalog.json"),
            cache_ttl: 300,
            environment: "development".to_string(),
        }
    }
}
