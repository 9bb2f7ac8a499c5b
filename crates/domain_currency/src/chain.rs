//! Ordered repository chain
//!
//! The chain holds its layers head first. The layer after a given layer is
//! that layer's fallback; the last layer has none.

use std::sync::Arc;
use tracing::{debug, instrument};

use core_kernel::{Currency, CurrencyId};

use crate::error::RepositoryError;
use crate::repository::{CurrencyRepository, LayerKind};

/// Ordered list of repository layers with read fallback and write fan-out
///
/// # Example
///
/// ```rust,ignore
/// let chain = RepositoryChain::builder()
///     .layer(Arc::new(CacheRepository::new(store)))
///     .layer(Arc::new(DatabaseRepository::new(currency_store)))
///     .build()?;
/// ```
#[derive(Clone)]
pub struct RepositoryChain {
    layers: Vec<Arc<dyn CurrencyRepository>>,
}

impl RepositoryChain {
    /// Starts building a chain
    pub fn builder() -> RepositoryChainBuilder {
        RepositoryChainBuilder::new()
    }

    /// Returns the layer names, head first
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    /// Returns the fallback of the layer at `index`
    pub fn next_of(&self, index: usize) -> Option<&Arc<dyn CurrencyRepository>> {
        self.layers.get(index + 1)
    }

    /// Finds a currency on the first layer that has it
    ///
    /// A hit on a later layer is not copied back into earlier layers; caches
    /// are only populated by `add` and `update`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no layer holds the currency
    #[instrument(skip(self), fields(currency_id = %id))]
    pub async fn get_by_id(&self, id: CurrencyId) -> Result<Option<Currency>, RepositoryError> {
        for layer in &self.layers {
            if let Some(currency) = layer.get_by_id(id).await? {
                debug!(layer = layer.name(), "Currency found");
                return Ok(Some(currency));
            }
            debug!(layer = layer.name(), "Currency not on layer");
        }

        debug!("Currency not found on any layer");
        Ok(None)
    }

    /// Adds a currency on every layer, store of record first
    ///
    /// Each layer receives the currency returned by the layer after it, so
    /// the identity assigned by the store reaches the caches.
    #[instrument(skip(self, currency), fields(iso_code = %currency.iso_code()))]
    pub async fn add(&self, currency: Currency) -> Result<Currency, RepositoryError> {
        let mut current = currency;
        for layer in self.layers.iter().rev() {
            current = layer.add(current).await?;
            debug!(layer = layer.name(), currency_id = %current.id(), "Currency added on layer");
        }
        Ok(current)
    }

    /// Updates a currency on every layer, store of record first
    #[instrument(skip(self, currency), fields(currency_id = %currency.id()))]
    pub async fn update(&self, currency: Currency) -> Result<Currency, RepositoryError> {
        let mut current = currency;
        for layer in self.layers.iter().rev() {
            current = layer.update(current).await?;
            debug!(layer = layer.name(), "Currency updated on layer");
        }
        Ok(current)
    }

    /// Deletes a currency from every layer, caches first
    ///
    /// # Returns
    ///
    /// `true` if every layer reported the delete as done
    #[instrument(skip(self, currency), fields(currency_id = %currency.id()))]
    pub async fn delete(&self, currency: &Currency) -> Result<bool, RepositoryError> {
        let mut deleted = true;
        for layer in &self.layers {
            let layer_deleted = layer.delete(currency).await?;
            debug!(layer = layer.name(), deleted = layer_deleted, "Currency deleted on layer");
            deleted &= layer_deleted;
        }
        Ok(deleted)
    }
}

impl std::fmt::Debug for RepositoryChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryChain")
            .field("layers", &self.layer_names())
            .finish()
    }
}

/// Builder for [`RepositoryChain`]
#[derive(Default)]
pub struct RepositoryChainBuilder {
    layers: Vec<Arc<dyn CurrencyRepository>>,
}

impl RepositoryChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer after the ones already added
    pub fn layer(mut self, layer: Arc<dyn CurrencyRepository>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Validates the composition and builds the chain
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidChain` if the chain is empty or if a
    /// cache layer is followed by another cache layer.
    pub fn build(self) -> Result<RepositoryChain, RepositoryError> {
        if self.layers.is_empty() {
            return Err(RepositoryError::invalid_chain("a chain needs at least one layer"));
        }

        for pair in self.layers.windows(2) {
            if pair[0].kind() == LayerKind::Cache && pair[1].kind() == LayerKind::Cache {
                return Err(RepositoryError::invalid_chain(format!(
                    "cache layer '{}' cannot fall back to cache layer '{}'",
                    pair[0].name(),
                    pair[1].name()
                )));
            }
        }

        Ok(RepositoryChain {
            layers: self.layers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheRepository;
    use crate::mock::{MockCacheStore, MockCurrencyRepository};
    use core_kernel::{CurrencyFactory, CurrencyParameters};

    fn franc(id: i64) -> Currency {
        CurrencyFactory::build(
            CurrencyParameters::new()
                .id(CurrencyId::new(id))
                .iso_code("CHF")
                .numeric_iso_code("756")
                .display_name("Swiss Franc")
                .symbol("CHF", "CHF"),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_chain_rejected() {
        let err = RepositoryChain::builder().build().unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidChain(_)));
    }

    #[test]
    fn test_cache_after_cache_rejected() {
        let err = RepositoryChain::builder()
            .layer(Arc::new(CacheRepository::new(MockCacheStore::new())))
            .layer(Arc::new(CacheRepository::new(MockCacheStore::new())))
            .layer(Arc::new(MockCurrencyRepository::new()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("cannot fall back to cache layer"));
    }

    #[test]
    fn test_cache_alone_is_valid() {
        let chain = RepositoryChain::builder()
            .layer(Arc::new(CacheRepository::new(MockCacheStore::new())))
            .build()
            .unwrap();
        assert_eq!(chain.layer_names(), vec!["cache"]);
        assert!(chain.next_of(0).is_none());
    }

    #[tokio::test]
    async fn test_add_propagates_assigned_id_to_cache() {
        let store = MockCacheStore::new();
        let chain = RepositoryChain::builder()
            .layer(Arc::new(CacheRepository::new(store.clone())))
            .layer(Arc::new(MockCurrencyRepository::new()))
            .build()
            .unwrap();

        let added = chain.add(franc(0)).await.unwrap();

        assert!(added.id().is_assigned());
        assert_eq!(store.len().await, 1);
        assert!(store.contains(&added.id().to_string()).await);
    }

    #[tokio::test]
    async fn test_update_missing_row_leaves_cache_untouched() {
        let store = MockCacheStore::new();
        let chain = RepositoryChain::builder()
            .layer(Arc::new(CacheRepository::new(store.clone())))
            .layer(Arc::new(MockCurrencyRepository::new()))
            .build()
            .unwrap();

        let err = chain.update(franc(5)).await.unwrap_err();

        assert!(err.is_currency_not_found());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_delete_invalidates_cache_even_when_row_missing() {
        let store = MockCacheStore::new();
        let cache = Arc::new(CacheRepository::new(store.clone()));
        cache.add(franc(5)).await.unwrap();

        let chain = RepositoryChain::builder()
            .layer(cache)
            .layer(Arc::new(MockCurrencyRepository::new()))
            .build()
            .unwrap();

        let err = chain.delete(&franc(5)).await.unwrap_err();

        assert!(err.is_currency_not_found());
        assert_eq!(store.len().await, 0);
    }
}
