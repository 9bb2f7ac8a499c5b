//! Currency persistence port
//!
//! The database-backed repository layer talks to the `currency` table through
//! the [`CurrencyStore`] trait. `PgCurrencyStore` is the production
//! implementation; `InMemoryCurrencyStore` backs tests.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::DatabaseError;

pub mod postgres;

#[cfg(any(test, feature = "mock"))]
pub mod memory;

pub use postgres::PgCurrencyStore;

#[cfg(any(test, feature = "mock"))]
pub use memory::InMemoryCurrencyStore;

/// Database row for an installed currency
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CurrencyRow {
    pub id: i64,
    pub iso_code: String,
    pub iso_code_num: String,
    pub decimals: i32,
    /// Name for the `default` count context; empty when the currency has none
    pub name: String,
    pub symbol: Option<String>,
    pub symbol_narrow: Option<String>,
    pub conversion_rate: Decimal,
    pub active: bool,
}

/// Data for inserting a currency row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCurrencyRow {
    pub iso_code: String,
    pub iso_code_num: String,
    pub decimals: i32,
    pub name: String,
    pub symbol: Option<String>,
    pub symbol_narrow: Option<String>,
    pub conversion_rate: Decimal,
    pub active: bool,
}

impl NewCurrencyRow {
    /// Attaches the primary key assigned on insert
    pub fn into_row(self, id: i64) -> CurrencyRow {
        CurrencyRow {
            id,
            iso_code: self.iso_code,
            iso_code_num: self.iso_code_num,
            decimals: self.decimals,
            name: self.name,
            symbol: self.symbol,
            symbol_narrow: self.symbol_narrow,
            conversion_rate: self.conversion_rate,
            active: self.active,
        }
    }
}

/// Row-level access to the `currency` table
#[async_trait]
pub trait CurrencyStore: Send + Sync + 'static {
    /// Loads the row with primary key `id`
    async fn load(&self, id: i64) -> Result<Option<CurrencyRow>, DatabaseError>;

    /// Inserts a row and returns it with its assigned primary key
    async fn insert(&self, row: NewCurrencyRow) -> Result<CurrencyRow, DatabaseError>;

    /// Overwrites the row with the same primary key
    ///
    /// # Returns
    ///
    /// The number of rows affected
    async fn update(&self, row: &CurrencyRow) -> Result<u64, DatabaseError>;

    /// Deletes the row with primary key `id`
    ///
    /// # Returns
    ///
    /// The number of rows affected
    async fn delete(&self, id: i64) -> Result<u64, DatabaseError>;
}
