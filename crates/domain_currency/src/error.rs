//! Repository errors
//!
//! Lookups that find nothing are not errors: `get_by_id` returns `Ok(None)`.
//! The errors here are write failures and broken collaborators.

use std::fmt;
use thiserror::Error;

use core_kernel::{CoreError, CurrencyId, PortError};

/// Write operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Add,
    Update,
    Delete,
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            WriteOperation::Add => "add",
            WriteOperation::Update => "update",
            WriteOperation::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// Errors raised by repository layers and the chain
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store of record has no row for the currency being written
    #[error("Cannot {operation} currency with id {id}: currency not found")]
    CurrencyNotFound {
        id: CurrencyId,
        operation: WriteOperation,
    },

    /// The chain was composed in a way that breaks its invariants
    #[error("Invalid repository chain: {0}")]
    InvalidChain(String),

    /// A backing store failed
    #[error(transparent)]
    Port(#[from] PortError),

    /// Stored data could not be turned back into a currency
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl RepositoryError {
    pub fn currency_not_found(id: CurrencyId, operation: WriteOperation) -> Self {
        RepositoryError::CurrencyNotFound { id, operation }
    }

    pub fn invalid_chain(message: impl Into<String>) -> Self {
        RepositoryError::InvalidChain(message.into())
    }

    /// Checks if this error reports a missing currency row
    pub fn is_currency_not_found(&self) -> bool {
        matches!(self, RepositoryError::CurrencyNotFound { .. })
    }
}
