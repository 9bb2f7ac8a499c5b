//! Cache construction errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The store must be able to hold at least one entry
    #[error("Cache capacity must be greater than zero")]
    ZeroCapacity,
}
