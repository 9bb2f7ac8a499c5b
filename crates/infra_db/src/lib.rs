//! Database infrastructure for installed currencies
//!
//! PostgreSQL access through SQLx: connection pooling, the `currency` schema,
//! a row-level [`CurrencyStore`] port and the [`DatabaseRepository`] layer
//! that serves as the store of record in a `RepositoryChain`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, DatabaseRepository, PgCurrencyStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/shop")).await?;
//! let repository = DatabaseRepository::new(PgCurrencyStore::new(pool));
//! ```

pub mod error;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod store;

pub use error::{db_to_port_error, DatabaseError};
pub use pool::{create_pool, DatabaseConfig, DatabasePool, DEFAULT_DATABASE_URL};
pub use repositories::DatabaseRepository;
pub use schema::{CURRENCY_SCHEMA, CURRENCY_SEED};
pub use store::{CurrencyRow, CurrencyStore, NewCurrencyRow, PgCurrencyStore};

#[cfg(any(test, feature = "mock"))]
pub use store::InMemoryCurrencyStore;
