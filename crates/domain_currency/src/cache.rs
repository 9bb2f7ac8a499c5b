//! Cache-backed repository layer
//!
//! Keeps a JSON copy of each currency in a key-value [`CacheStore`], keyed by
//! the decimal currency id. The layer is best effort: a failing store or an
//! unreadable entry is logged and treated as a miss, never returned as an
//! error.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

use core_kernel::{
    CoreError, Currency, CurrencyFactory, CurrencyId, CurrencyParameters, DomainPort, NameContext,
    PortError, SymbolType,
};

use crate::error::RepositoryError;
use crate::repository::{CurrencyRepository, LayerKind};

/// Key-value store used by the cache layer
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Returns the raw entry stored under `key`, if any
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>, PortError>;

    /// Stores `value` under `key`, replacing any previous entry
    async fn set_item(&self, key: &str, value: Vec<u8>) -> Result<(), PortError>;

    /// Removes the entry under `key`
    ///
    /// # Returns
    ///
    /// `true` if an entry existed
    async fn delete_item(&self, key: &str) -> Result<bool, PortError>;
}

/// Symbol pair as stored in the cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedSymbol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrow: Option<String>,
}

/// Cache payload for one currency
///
/// The id is not part of the payload; it is the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedCurrency {
    pub iso_code: String,
    pub numeric_iso_code: String,
    pub decimal_digits: u32,
    #[serde(default)]
    pub localized_names: BTreeMap<String, String>,
    #[serde(default)]
    pub symbol: CachedSymbol,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<&Currency> for CachedCurrency {
    fn from(currency: &Currency) -> Self {
        Self {
            iso_code: currency.iso_code().to_string(),
            numeric_iso_code: currency.numeric_iso_code().to_string(),
            decimal_digits: currency.decimal_digits(),
            localized_names: currency
                .names()
                .iter()
                .map(|(context, name)| (context.as_str().to_string(), name.clone()))
                .collect(),
            symbol: CachedSymbol {
                default: currency.symbol(SymbolType::Default).ok().map(str::to_string),
                narrow: currency.symbol(SymbolType::Narrow).ok().map(str::to_string),
            },
            conversion_rate: Some(currency.conversion_rate()),
            is_active: Some(currency.is_active()),
        }
    }
}

impl CachedCurrency {
    /// Rebuilds the currency stored under `id`
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if a name context is unknown or the factory
    /// rejects the cached values.
    pub fn into_currency(self, id: CurrencyId) -> Result<Currency, CoreError> {
        let mut names = BTreeMap::new();
        for (context, name) in self.localized_names {
            names.insert(context.parse::<NameContext>()?, name);
        }

        let mut symbols = BTreeMap::new();
        if let Some(default) = self.symbol.default {
            symbols.insert(SymbolType::Default, default);
        }
        if let Some(narrow) = self.symbol.narrow {
            symbols.insert(SymbolType::Narrow, narrow);
        }

        let mut params = CurrencyParameters::new()
            .id(id)
            .iso_code(self.iso_code)
            .numeric_iso_code(self.numeric_iso_code)
            .decimal_digits(self.decimal_digits)
            .display_names(names)
            .symbols(symbols);
        if let Some(rate) = self.conversion_rate {
            params = params.conversion_rate(rate);
        }
        if let Some(is_active) = self.is_active {
            params = params.active(is_active);
        }

        CurrencyFactory::build(params)
    }
}

/// Repository layer backed by a [`CacheStore`]
///
/// Only currencies with an assigned identity are cached. `add` and `update`
/// on a currency whose id is zero or negative silently store nothing, so a
/// currency that never reached the store of record is never cached.
#[derive(Debug, Clone)]
pub struct CacheRepository<S: CacheStore> {
    store: S,
}

impl<S: CacheStore> CacheRepository<S> {
    /// Creates a cache layer over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    fn cache_key(id: CurrencyId) -> String {
        id.to_string()
    }

    async fn set_in_cache(&self, currency: &Currency) {
        if !currency.id().is_assigned() {
            debug!(iso_code = %currency.iso_code(), "Currency has no id yet, not cached");
            return;
        }

        let key = Self::cache_key(currency.id());
        let payload = match serde_json::to_vec(&CachedCurrency::from(currency)) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(currency_id = %currency.id(), error = %e, "Failed to encode cache payload");
                return;
            }
        };

        if let Err(e) = self.store.set_item(&key, payload).await {
            warn!(currency_id = %currency.id(), error = %e, "Failed to write currency to cache");
        }
    }
}

impl<S: CacheStore> DomainPort for CacheRepository<S> {}

#[async_trait]
impl<S: CacheStore> CurrencyRepository for CacheRepository<S> {
    fn name(&self) -> &'static str {
        "cache"
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Cache
    }

    #[instrument(skip(self), fields(currency_id = %id))]
    async fn get_by_id(&self, id: CurrencyId) -> Result<Option<Currency>, RepositoryError> {
        let raw = match self.store.get_item(&Self::cache_key(id)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "Cache read failed, treating as miss");
                return Ok(None);
            }
        };

        let cached: CachedCurrency = match serde_json::from_slice(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                warn!(error = %e, "Unreadable cache entry, treating as miss");
                return Ok(None);
            }
        };

        match cached.into_currency(id) {
            Ok(currency) => Ok(Some(currency)),
            Err(e) => {
                warn!(error = %e, "Invalid cached currency, treating as miss");
                Ok(None)
            }
        }
    }

    async fn add(&self, currency: Currency) -> Result<Currency, RepositoryError> {
        self.set_in_cache(&currency).await;
        Ok(currency)
    }

    async fn update(&self, currency: Currency) -> Result<Currency, RepositoryError> {
        self.set_in_cache(&currency).await;
        Ok(currency)
    }

    async fn delete(&self, currency: &Currency) -> Result<bool, RepositoryError> {
        if let Err(e) = self.store.delete_item(&Self::cache_key(currency.id())).await {
            warn!(currency_id = %currency.id(), error = %e, "Failed to evict currency from cache");
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockCacheStore;
    use rust_decimal_macros::dec;

    fn dollar(id: i64) -> Currency {
        let mut names = BTreeMap::new();
        names.insert(NameContext::Default, "US Dollar".to_string());
        names.insert(NameContext::One, "US dollar".to_string());
        names.insert(NameContext::Other, "US dollars".to_string());

        CurrencyFactory::build(
            CurrencyParameters::new()
                .id(CurrencyId::new(id))
                .iso_code("USD")
                .numeric_iso_code("840")
                .decimal_digits(2)
                .display_names(names)
                .symbol("US$", "$")
                .conversion_rate(dec!(1.31)),
        )
        .unwrap()
    }

    #[test]
    fn test_payload_uses_camel_case_fields() {
        let json = serde_json::to_value(CachedCurrency::from(&dollar(2))).unwrap();
        assert_eq!(json["isoCode"], "USD");
        assert_eq!(json["numericIsoCode"], "840");
        assert_eq!(json["decimalDigits"], 2);
        assert_eq!(json["localizedNames"]["other"], "US dollars");
        assert_eq!(json["symbol"]["default"], "US$");
        assert_eq!(json["symbol"]["narrow"], "$");
    }

    #[test]
    fn test_payload_without_supplements_decodes_with_defaults() {
        let raw = r#"{
            "isoCode": "EUR",
            "numericIsoCode": "978",
            "decimalDigits": 2,
            "localizedNames": {"default": "Euro"},
            "symbol": {"default": "€", "narrow": "€"}
        }"#;
        let cached: CachedCurrency = serde_json::from_slice(raw.as_bytes()).unwrap();
        let euro = cached.into_currency(CurrencyId::new(1)).unwrap();

        assert_eq!(euro.conversion_rate(), Decimal::ONE);
        assert!(euro.is_active());
        assert_eq!(euro.symbol(SymbolType::Narrow).unwrap(), "€");
    }

    #[tokio::test]
    async fn test_add_then_get_returns_same_currency() {
        let cache = CacheRepository::new(MockCacheStore::new());
        let usd = dollar(2);

        cache.add(usd.clone()).await.unwrap();

        assert_eq!(cache.get_by_id(CurrencyId::new(2)).await.unwrap(), Some(usd));
    }

    #[tokio::test]
    async fn test_unassigned_id_is_not_cached() {
        let store = MockCacheStore::new();
        let cache = CacheRepository::new(store.clone());

        cache.add(dollar(0)).await.unwrap();
        cache.update(dollar(-3)).await.unwrap();

        assert_eq!(store.len().await, 0);
        assert_eq!(cache.get_by_id(CurrencyId::UNASSIGNED).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_twice_returns_true() {
        let cache = CacheRepository::new(MockCacheStore::new());
        let usd = dollar(2);
        cache.add(usd.clone()).await.unwrap();

        assert!(cache.delete(&usd).await.unwrap());
        assert!(cache.delete(&usd).await.unwrap());
        assert_eq!(cache.get_by_id(usd.id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failing_store_never_raises() {
        let cache = CacheRepository::new(MockCacheStore::failing());
        let usd = dollar(2);

        assert_eq!(cache.add(usd.clone()).await.unwrap(), usd);
        assert_eq!(cache.get_by_id(usd.id()).await.unwrap(), None);
        assert!(cache.delete(&usd).await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() {
        let store = MockCacheStore::new();
        store.insert_raw("2", b"not json".to_vec()).await;
        store.insert_raw("3", br#"{"isoCode":"US","numericIsoCode":"840","decimalDigits":2}"#.to_vec()).await;
        let cache = CacheRepository::new(store);

        assert_eq!(cache.get_by_id(CurrencyId::new(2)).await.unwrap(), None);
        assert_eq!(cache.get_by_id(CurrencyId::new(3)).await.unwrap(), None);
    }
}
