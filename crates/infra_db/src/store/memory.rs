//! In-memory currency store
//!
//! Mirrors the constraints of the `currency` table: sequential primary keys,
//! unique ISO codes, non-negative decimals and a positive conversion rate.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::{CurrencyRow, CurrencyStore, NewCurrencyRow};
use crate::error::DatabaseError;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, CurrencyRow>,
    last_id: i64,
}

/// `CurrencyStore` kept in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCurrencyStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryCurrencyStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates with rows, keeping their primary keys
    pub async fn with_rows(rows: Vec<CurrencyRow>) -> Self {
        let store = Self::new();
        {
            let mut table = store.table.write().await;
            for row in rows {
                table.last_id = table.last_id.max(row.id);
                table.rows.insert(row.id, row);
            }
        }
        store
    }

    /// Returns a snapshot of every row ordered by primary key
    pub async fn rows(&self) -> Vec<CurrencyRow> {
        self.table.read().await.rows.values().cloned().collect()
    }

    fn check_constraints(
        table: &Table,
        id: Option<i64>,
        iso_code: &str,
        iso_code_num: &str,
        decimals: i32,
        conversion_rate: Decimal,
    ) -> Result<(), DatabaseError> {
        if decimals < 0 {
            return Err(DatabaseError::ConstraintViolation(format!(
                "decimals must be >= 0, got {}",
                decimals
            )));
        }
        if conversion_rate <= Decimal::ZERO {
            return Err(DatabaseError::ConstraintViolation(format!(
                "conversion_rate must be > 0, got {}",
                conversion_rate
            )));
        }

        for other in table.rows.values().filter(|row| Some(row.id) != id) {
            if other.iso_code == iso_code {
                return Err(DatabaseError::duplicate("Currency", "iso_code", iso_code));
            }
            if other.iso_code_num == iso_code_num {
                return Err(DatabaseError::duplicate("Currency", "iso_code_num", iso_code_num));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CurrencyStore for InMemoryCurrencyStore {
    async fn load(&self, id: i64) -> Result<Option<CurrencyRow>, DatabaseError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, row: NewCurrencyRow) -> Result<CurrencyRow, DatabaseError> {
        let mut table = self.table.write().await;
        Self::check_constraints(
            &table,
            None,
            &row.iso_code,
            &row.iso_code_num,
            row.decimals,
            row.conversion_rate,
        )?;

        table.last_id += 1;
        let row = row.into_row(table.last_id);
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, row: &CurrencyRow) -> Result<u64, DatabaseError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&row.id) {
            return Ok(0);
        }
        Self::check_constraints(
            &table,
            Some(row.id),
            &row.iso_code,
            &row.iso_code_num,
            row.decimals,
            row.conversion_rate,
        )?;

        table.rows.insert(row.id, row.clone());
        Ok(1)
    }

    async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_row(iso_code: &str, iso_code_num: &str) -> NewCurrencyRow {
        NewCurrencyRow {
            iso_code: iso_code.to_string(),
            iso_code_num: iso_code_num.to_string(),
            decimals: 2,
            name: String::new(),
            symbol: None,
            symbol_narrow: None,
            conversion_rate: dec!(1),
            active: true,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_keys() {
        let store = InMemoryCurrencyStore::new();
        assert_eq!(store.insert(new_row("EUR", "978")).await.unwrap().id, 1);
        assert_eq!(store.insert(new_row("USD", "840")).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_duplicate_iso_code_rejected() {
        let store = InMemoryCurrencyStore::new();
        store.insert(new_row("EUR", "978")).await.unwrap();

        let err = store.insert(new_row("EUR", "999")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::DuplicateEntry(_)));
        assert_eq!(store.rows().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_rows_affect_nothing() {
        let store = InMemoryCurrencyStore::new();
        let ghost = new_row("EUR", "978").into_row(9);
        assert_eq!(store.update(&ghost).await.unwrap(), 0);
        assert_eq!(store.delete(9).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_non_positive_rate_violates_constraint() {
        let store = InMemoryCurrencyStore::new();
        let mut row = new_row("EUR", "978");
        row.conversion_rate = Decimal::ZERO;
        assert!(store.insert(row).await.unwrap_err().is_constraint_violation());
    }
}
