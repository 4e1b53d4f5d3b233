//! Configuration Module
//!
//! Handles loading shell configuration from environment variables.

use std::env;

/// Shell configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Instance name shown in the prompt and startup banner
    pub cache_name: String,
    /// Optional path for persisted readline history
    pub history_file: Option<String>,
    /// Optional seed for the fill random source; None means entropy-seeded
    pub fill_seed: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_NAME` - Instance name (default: "cache")
    /// - `HISTORY_FILE` - Readline history path (default: none, no persistence)
    /// - `FILL_SEED` - Seed for the fill random source (default: none)
    pub fn from_env() -> Self {
        Self {
            cache_name: env::var("CACHE_NAME").unwrap_or_else(|_| "cache".to_string()),
            history_file: env::var("HISTORY_FILE").ok(),
            fill_seed: env::var("FILL_SEED").ok().and_then(|v| v.parse().ok()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_name: "cache".to_string(),
            history_file: None,
            fill_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_name, "cache");
        assert_eq!(config.history_file, None);
        assert_eq!(config.fill_seed, None);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_NAME");
        env::remove_var("HISTORY_FILE");
        env::remove_var("FILL_SEED");

        let config = Config::from_env();
        assert_eq!(config.cache_name, "cache");
        assert_eq!(config.history_file, None);
        assert_eq!(config.fill_seed, None);

        // A seed that does not parse behaves like no seed at all
        env::set_var("FILL_SEED", "not-a-number");
        assert_eq!(Config::from_env().fill_seed, None);
        env::remove_var("FILL_SEED");
    }
}
