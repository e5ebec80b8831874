//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default freshness window: five minutes, matching the dashboard session
/// refresh cadence.
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a cached response stays fresh
    pub ttl: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Freshness window in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            ttl: Duration::from_secs(
                env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TTL_SECS),
            ),
        }
    }

    /// Creates a config with an explicit TTL, for callers that do not want
    /// environment-driven configuration (tests construct short windows).
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_config_with_ttl() {
        let config = CacheConfig::with_ttl(Duration::from_millis(50));
        assert_eq!(config.ttl, Duration::from_millis(50));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env var to test the default
        env::remove_var("CACHE_TTL_SECS");

        let config = CacheConfig::from_env();
        assert_eq!(config.ttl, Duration::from_secs(300));
    }
}
