//! Regression tests for a `[cache, database]` chain
//!
//! The database layer runs over the in-memory store, pre-populated with
//! a dollar under id 2.

use std::sync::Arc;

use core_kernel::{CurrencyId, NameContext, SymbolType};
use domain_currency::mock::MockCacheStore;
use domain_currency::{CacheRepository, CurrencyRepository, RepositoryChain};
use infra_db::{DatabaseRepository, InMemoryCurrencyStore};
use test_utils::{
    assert_same_currency_data, assert_same_persisted_data, row_for, unknown_id, CurrencyFixtures,
    TestCurrencyBuilder,
};

struct Harness {
    cache_store: MockCacheStore,
    cache: Arc<CacheRepository<MockCacheStore>>,
    database: Arc<DatabaseRepository<InMemoryCurrencyStore>>,
    chain: RepositoryChain,
}

async fn harness() -> Harness {
    let cache_store = MockCacheStore::new();
    let cache = Arc::new(CacheRepository::new(cache_store.clone()));
    let rows = vec![row_for(&CurrencyFixtures::composition_dollar())];
    let database = Arc::new(DatabaseRepository::new(
        InMemoryCurrencyStore::with_rows(rows).await,
    ));
    let chain = RepositoryChain::builder()
        .layer(cache.clone())
        .layer(database.clone())
        .build()
        .unwrap();

    Harness {
        cache_store,
        cache,
        database,
        chain,
    }
}

fn renamed_dollar() -> core_kernel::Currency {
    TestCurrencyBuilder::new()
        .with_id(2)
        .with_iso_code("USD", "840")
        .with_name("US Dollar")
        .with_symbols("US$", "$")
        .build()
}

#[tokio::test]
async fn test_read_before_any_cache_write_comes_from_database() {
    let h = harness().await;

    let from_chain = h.chain.get_by_id(CurrencyId::new(2)).await.unwrap().unwrap();
    let from_database = h.database.get_by_id(CurrencyId::new(2)).await.unwrap().unwrap();

    assert_eq!(from_chain, from_database);
    assert_same_currency_data(&from_chain, &CurrencyFixtures::composition_dollar());
    // The fallback hit is not copied into the cache
    assert_eq!(h.cache_store.len().await, 0);
}

#[tokio::test]
async fn test_cache_update_does_not_reach_database() {
    let h = harness().await;

    h.cache.update(renamed_dollar()).await.unwrap();

    let from_database = h.database.get_by_id(CurrencyId::new(2)).await.unwrap().unwrap();
    assert_eq!(from_database.name(NameContext::Default).unwrap(), "Dollar");
    assert_eq!(from_database.symbol(SymbolType::Default).unwrap(), "$");

    // The chain now answers from the cache
    let from_chain = h.chain.get_by_id(CurrencyId::new(2)).await.unwrap().unwrap();
    assert_eq!(from_chain.name(NameContext::Default).unwrap(), "US Dollar");
}

#[tokio::test]
async fn test_database_update_applied_directly() {
    let h = harness().await;
    h.cache.update(renamed_dollar()).await.unwrap();

    h.database.update(renamed_dollar()).await.unwrap();

    let from_database = h.database.get_by_id(CurrencyId::new(2)).await.unwrap().unwrap();
    assert_same_persisted_data(&from_database, &renamed_dollar());
}

#[tokio::test]
async fn test_update_through_chain_reaches_every_layer() {
    let h = harness().await;

    h.chain.update(renamed_dollar()).await.unwrap();

    let from_database = h.database.get_by_id(CurrencyId::new(2)).await.unwrap().unwrap();
    let from_cache = h.cache.get_by_id(CurrencyId::new(2)).await.unwrap().unwrap();
    assert_same_persisted_data(&from_database, &renamed_dollar());
    assert_same_currency_data(&from_cache, &renamed_dollar());
}

#[tokio::test]
async fn test_add_through_chain_caches_assigned_id() {
    let h = harness().await;

    let added = h.chain.add(CurrencyFixtures::jpy().with_id(CurrencyId::UNASSIGNED)).await.unwrap();

    assert_eq!(added.id(), CurrencyId::new(3));
    assert!(h.cache_store.contains("3").await);
    let from_database = h.database.get_by_id(added.id()).await.unwrap().unwrap();
    assert_same_persisted_data(&from_database, &added);
}

#[tokio::test]
async fn test_delete_through_chain_removes_from_every_layer() {
    let h = harness().await;
    let dollar = CurrencyFixtures::composition_dollar();
    h.cache.add(dollar.clone()).await.unwrap();

    assert!(h.chain.delete(&dollar).await.unwrap());

    assert_eq!(h.cache_store.len().await, 0);
    assert!(h.chain.get_by_id(dollar.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_writes_to_unknown_id_fail_and_leave_database_unchanged() {
    let h = harness().await;
    let before = h.database.store().rows().await;
    let ghost = TestCurrencyBuilder::new().with_id(unknown_id().value()).build();

    let update = h.chain.update(ghost.clone()).await.unwrap_err();
    let delete = h.chain.delete(&ghost).await.unwrap_err();

    assert!(update.is_currency_not_found());
    assert!(delete.is_currency_not_found());
    assert_eq!(h.database.store().rows().await, before);
    assert_eq!(h.cache_store.len().await, 0);
}
