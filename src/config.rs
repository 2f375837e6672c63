//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of products held in the by-id cache
    pub cache_max_entries: usize,
    /// Seconds a cached entry stays valid, 0 = never expires
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CACHE_MAX_ENTRIES` - By-id cache capacity (default: 1000)
    /// - `CACHE_TTL` - Cache entry TTL in seconds, 0 disables expiry (default: 600)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cache_max_entries: Some(env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries))
                .filter(|max| *max > 0)
                .unwrap_or(defaults.cache_max_entries),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    /// Cache TTL as passed to the cache stores (`None` when expiry is disabled).
    pub fn ttl(&self) -> Option<u64> {
        (self.cache_ttl > 0).then_some(self.cache_ttl)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            cache_max_entries: 1000,
            cache_ttl: 600,
            cleanup_interval: 1,
        }
    }
}
