//! PostgreSQL store tests
//!
//! Need Docker: `cargo test -p test_utils -- --ignored`

use core_kernel::{AdapterHealth, CurrencyId, HealthCheckable, PortError};
use domain_currency::{CurrencyRepository, RepositoryError};
use infra_db::{DatabaseRepository, PgCurrencyStore};
use rust_decimal_macros::dec;
use test_utils::{
    assert_same_persisted_data, create_isolated_test_database, CurrencyFixtures,
    TestCurrencyBuilder,
};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_seeded_currencies_load() {
    let db = create_isolated_test_database().await.unwrap();
    db.seed().await.unwrap();
    let repository = DatabaseRepository::new(PgCurrencyStore::new(db.pool().clone()));

    for expected in CurrencyFixtures::seeded() {
        let loaded = repository.get_by_id(expected.id()).await.unwrap().unwrap();
        assert_same_persisted_data(&loaded, &expected);
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_add_update_delete_round_trip() {
    let db = create_isolated_test_database().await.unwrap();
    let repository = DatabaseRepository::new(PgCurrencyStore::new(db.pool().clone()));

    let added = repository.add(TestCurrencyBuilder::new().build()).await.unwrap();
    assert_eq!(added.id(), CurrencyId::new(1));

    let renamed = TestCurrencyBuilder::new()
        .with_id(added.id().value())
        .with_name("Franc suisse")
        .without_symbols()
        .build();
    repository.update(renamed.clone()).await.unwrap();
    let loaded = repository.get_by_id(added.id()).await.unwrap().unwrap();
    assert_same_persisted_data(&loaded, &renamed);

    assert!(repository.delete(&loaded).await.unwrap());
    assert!(repository.get_by_id(added.id()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_iso_code_is_conflict() {
    let db = create_isolated_test_database().await.unwrap();
    db.seed().await.unwrap();
    let repository = DatabaseRepository::new(PgCurrencyStore::new(db.pool().clone()));

    let err = repository
        .add(CurrencyFixtures::usd().with_id(CurrencyId::UNASSIGNED))
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Port(PortError::Conflict { .. })));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_seed_moves_sequence_past_reference_ids() {
    let db = create_isolated_test_database().await.unwrap();
    db.seed().await.unwrap();
    let repository = DatabaseRepository::new(PgCurrencyStore::new(db.pool().clone()));

    let added = repository.add(TestCurrencyBuilder::new().build()).await.unwrap();

    assert_eq!(added.id(), CurrencyId::new(4));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_health_check_reports_healthy() {
    let db = create_isolated_test_database().await.unwrap();
    let store = PgCurrencyStore::new(db.pool().clone());

    assert_eq!(store.health_check().await.status, AdapterHealth::Healthy);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_conversion_rate_is_stored_without_rounding() {
    let db = create_isolated_test_database().await.unwrap();
    let repository = DatabaseRepository::new(PgCurrencyStore::new(db.pool().clone()));

    for rate in [dec!(1.23456789), dec!(0.0000001)] {
        let added = repository
            .add(TestCurrencyBuilder::new().with_conversion_rate(rate).build())
            .await
            .unwrap();
        let loaded = repository.get_by_id(added.id()).await.unwrap().unwrap();

        assert_eq!(loaded.conversion_rate(), rate);
        assert!(repository.delete(&loaded).await.unwrap());
    }
}
