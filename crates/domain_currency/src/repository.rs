//! Repository layer capability
//!
//! A layer acts on its own backend only. Falling back to another layer on a
//! miss, and fanning writes out to every layer, is the job of
//! [`RepositoryChain`](crate::chain::RepositoryChain).

use async_trait::async_trait;
use std::fmt;

use core_kernel::{Currency, CurrencyId, DomainPort};

use crate::error::RepositoryError;

/// What a layer stores, used to validate chain composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Best-effort copy of data owned elsewhere
    Cache,
    /// Store of record
    Persistent,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Cache => f.write_str("cache"),
            LayerKind::Persistent => f.write_str("persistent"),
        }
    }
}

/// One layer of the installed currency repository chain
#[async_trait]
pub trait CurrencyRepository: DomainPort {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn kind(&self) -> LayerKind;

    /// Looks the currency up on this layer only
    ///
    /// # Returns
    ///
    /// `Ok(None)` when this layer does not hold the currency
    async fn get_by_id(&self, id: CurrencyId) -> Result<Option<Currency>, RepositoryError>;

    /// Stores a new currency on this layer
    ///
    /// # Returns
    ///
    /// The currency as this layer sees it after the write, which may carry a
    /// newly assigned identity
    async fn add(&self, currency: Currency) -> Result<Currency, RepositoryError>;

    /// Overwrites an existing currency on this layer
    async fn update(&self, currency: Currency) -> Result<Currency, RepositoryError>;

    /// Removes a currency from this layer
    async fn delete(&self, currency: &Currency) -> Result<bool, RepositoryError>;
}
