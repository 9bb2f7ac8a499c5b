//! Core error types used across the system

use thiserror::Error;

/// Failure to resolve a localized currency attribute
///
/// A currency only knows the symbol and name contexts it was built with.
/// Asking for any other context fails instead of falling back to a default.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocalizationError {
    #[error("Invalid symbol type: {0}")]
    InvalidSymbolType(String),

    #[error("Invalid count context: {0}")]
    InvalidCountContext(String),
}

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Localization error: {0}")]
    Localization(#[from] LocalizationError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Returns true if this is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}
