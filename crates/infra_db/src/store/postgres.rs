//! PostgreSQL currency store

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable};

use super::{CurrencyRow, CurrencyStore, NewCurrencyRow};
use crate::error::DatabaseError;

const ADAPTER_ID: &str = "postgres-currency-store";

/// `CurrencyStore` over the `currency` table
#[derive(Debug, Clone)]
pub struct PgCurrencyStore {
    pool: PgPool,
}

impl PgCurrencyStore {
    /// Creates a store using the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CurrencyStore for PgCurrencyStore {
    #[instrument(skip(self))]
    async fn load(&self, id: i64) -> Result<Option<CurrencyRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CurrencyRow>(
            r#"
            SELECT
                id, iso_code, iso_code_num, decimals, name,
                symbol, symbol_narrow, conversion_rate, active
            FROM currency
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        debug!(found = row.is_some(), "Loaded currency row");
        Ok(row)
    }

    #[instrument(skip(self, row), fields(iso_code = %row.iso_code))]
    async fn insert(&self, row: NewCurrencyRow) -> Result<CurrencyRow, DatabaseError> {
        let inserted = sqlx::query_as::<_, CurrencyRow>(
            r#"
            INSERT INTO currency (
                iso_code, iso_code_num, decimals, name,
                symbol, symbol_narrow, conversion_rate, active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                id, iso_code, iso_code_num, decimals, name,
                symbol, symbol_narrow, conversion_rate, active
            "#,
        )
        .bind(&row.iso_code)
        .bind(&row.iso_code_num)
        .bind(row.decimals)
        .bind(&row.name)
        .bind(&row.symbol)
        .bind(&row.symbol_narrow)
        .bind(row.conversion_rate)
        .bind(row.active)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = inserted.id, "Inserted currency row");
        Ok(inserted)
    }

    #[instrument(skip(self, row), fields(id = row.id))]
    async fn update(&self, row: &CurrencyRow) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE currency
            SET iso_code = $2,
                iso_code_num = $3,
                decimals = $4,
                name = $5,
                symbol = $6,
                symbol_narrow = $7,
                conversion_rate = $8,
                active = $9
            WHERE id = $1
            "#,
        )
        .bind(row.id)
        .bind(&row.iso_code)
        .bind(&row.iso_code_num)
        .bind(row.decimals)
        .bind(&row.name)
        .bind(&row.symbol)
        .bind(&row.symbol_narrow)
        .bind(row.conversion_rate)
        .bind(row.active)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM currency WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl HealthCheckable for PgCurrencyStore {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}
