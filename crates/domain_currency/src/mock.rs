//! In-memory test doubles
//!
//! `MockCacheStore` stands in for a key-value cache and can be switched into
//! a failing mode. `MockCurrencyRepository` is a persistent layer that hands
//! out sequential ids and rejects writes to missing rows, like the database
//! layer does.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{Currency, CurrencyId, DomainPort, PortError};

use crate::cache::CacheStore;
use crate::error::{RepositoryError, WriteOperation};
use crate::repository::{CurrencyRepository, LayerKind};

/// In-memory cache store
#[derive(Debug, Clone, Default)]
pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    failing: Arc<AtomicBool>,
}

impl MockCacheStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose every operation fails with a connection error
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    /// Stores raw bytes, bypassing the cache layer
    pub async fn insert_raw(&self, key: &str, value: Vec<u8>) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    fn check(&self) -> Result<(), PortError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PortError::connection("mock cache store is unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>, PortError> {
        self.check()?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: Vec<u8>) -> Result<(), PortError> {
        self.check()?;
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete_item(&self, key: &str) -> Result<bool, PortError> {
        self.check()?;
        Ok(self.entries.write().await.remove(key).is_some())
    }
}

/// In-memory persistent layer
#[derive(Debug)]
pub struct MockCurrencyRepository {
    currencies: Arc<RwLock<BTreeMap<CurrencyId, Currency>>>,
    last_id: AtomicI64,
}

impl Default for MockCurrencyRepository {
    fn default() -> Self {
        Self {
            currencies: Arc::new(RwLock::new(BTreeMap::new())),
            last_id: AtomicI64::new(0),
        }
    }
}

impl MockCurrencyRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates with currencies, keeping their ids
    pub async fn with_currencies(currencies: Vec<Currency>) -> Self {
        let repository = Self::new();
        {
            let mut stored = repository.currencies.write().await;
            for currency in currencies {
                repository
                    .last_id
                    .fetch_max(currency.id().value(), Ordering::SeqCst);
                stored.insert(currency.id(), currency);
            }
        }
        repository
    }

    /// Number of stored currencies
    pub async fn len(&self) -> usize {
        self.currencies.read().await.len()
    }
}

impl DomainPort for MockCurrencyRepository {}

#[async_trait]
impl CurrencyRepository for MockCurrencyRepository {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Persistent
    }

    async fn get_by_id(&self, id: CurrencyId) -> Result<Option<Currency>, RepositoryError> {
        Ok(self.currencies.read().await.get(&id).cloned())
    }

    async fn add(&self, currency: Currency) -> Result<Currency, RepositoryError> {
        let id = CurrencyId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let currency = currency.with_id(id);
        self.currencies.write().await.insert(id, currency.clone());
        Ok(currency)
    }

    async fn update(&self, currency: Currency) -> Result<Currency, RepositoryError> {
        let mut currencies = self.currencies.write().await;
        let stored = currencies
            .get_mut(&currency.id())
            .ok_or_else(|| RepositoryError::currency_not_found(currency.id(), WriteOperation::Update))?;
        *stored = currency.clone();
        Ok(currency)
    }

    async fn delete(&self, currency: &Currency) -> Result<bool, RepositoryError> {
        self.currencies
            .write()
            .await
            .remove(&currency.id())
            .map(|_| true)
            .ok_or_else(|| RepositoryError::currency_not_found(currency.id(), WriteOperation::Delete))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CurrencyFactory, CurrencyParameters};

    fn pound() -> Currency {
        CurrencyFactory::build(
            CurrencyParameters::new()
                .iso_code("GBP")
                .numeric_iso_code("826")
                .display_name("Pound"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_mock_repository_assigns_sequential_ids() {
        let repository = MockCurrencyRepository::new();
        let first = repository.add(pound()).await.unwrap();
        let second = repository.add(pound()).await.unwrap();
        assert_eq!(first.id(), CurrencyId::new(1));
        assert_eq!(second.id(), CurrencyId::new(2));
    }

    #[tokio::test]
    async fn test_mock_repository_continues_after_seeded_ids() {
        let repository = MockCurrencyRepository::with_currencies(vec![pound().with_id(CurrencyId::new(4))]).await;
        let added = repository.add(pound()).await.unwrap();
        assert_eq!(added.id(), CurrencyId::new(5));
        assert_eq!(repository.len().await, 2);
    }

    #[tokio::test]
    async fn test_failing_store_reports_connection_error() {
        let store = MockCacheStore::failing();
        let err = store.get_item("1").await.unwrap_err();
        assert!(err.is_transient());
    }
}
