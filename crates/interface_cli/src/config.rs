//! CLI configuration

use serde::Deserialize;
use std::time::Duration;

use infra_db::{DatabaseConfig, DEFAULT_DATABASE_URL};

/// Environment variable prefix, e.g. `CURRENCY_DATABASE_URL`
pub const ENV_PREFIX: &str = "CURRENCY";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Maximum number of currencies held by the in-memory cache
    pub cache_capacity: usize,
    pub max_connections: u32,
    /// Seconds to wait for a database connection
    pub connect_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_level: "info".to_string(),
            cache_capacity: 256,
            max_connections: 5,
            connect_timeout_secs: 30,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `CURRENCY_*` environment variables
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Pool options for the configured database
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.max_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_local_database() {
        let config = CliConfig::default();
        assert_eq!(config.database_url, "postgres://localhost/shop");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cache_capacity, 256);
    }

    #[test]
    fn test_database_config_carries_pool_options() {
        let config = CliConfig {
            max_connections: 2,
            connect_timeout_secs: 3,
            ..CliConfig::default()
        };

        let db = config.database_config();

        assert_eq!(db.max_connections, 2);
        assert_eq!(db.connect_timeout, Duration::from_secs(3));
        assert_eq!(db.url, config.database_url);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: CliConfig = config::Config::builder()
            .set_override("log_level", "debug")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_connections, 5);
    }
}
