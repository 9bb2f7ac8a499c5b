//! CLI error handling

use thiserror::Error;

use domain_currency::RepositoryError;
use infra_cache::CacheError;
use infra_db::DatabaseError;

/// Exit code for a command that ran and failed
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for unusable input
pub const EXIT_USAGE: u8 = 2;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown test database action '{action}'. It must be one of these values: {allowed}")]
    InvalidAction { action: String, allowed: String },

    #[error("Invalid currency id '{0}'")]
    InvalidId(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidAction { .. } | CliError::InvalidId(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
