//! Currency schema and reference data
//!
//! The SQL lives in the workspace `migrations/` directory and is embedded at
//! compile time so the CLI and the test harness apply exactly the same DDL.

use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

/// DDL for the `currency` table
pub const CURRENCY_SCHEMA: &str = include_str!("../../../migrations/0001_currency.sql");

/// Reference currencies (EUR, USD, JPY with ids 1, 2, 3)
pub const CURRENCY_SEED: &str = include_str!("../../../migrations/seed_currency.sql");

/// Creates the `currency` table if it does not exist
pub async fn apply_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Applying currency schema");
    run(pool, CURRENCY_SCHEMA).await
}

/// Drops the `currency` table and everything in it
pub async fn drop_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Dropping currency schema");
    run(pool, "DROP TABLE IF EXISTS currency").await
}

/// Inserts the reference currencies and moves the id sequence past them
pub async fn seed(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Seeding reference currencies");
    run(pool, CURRENCY_SEED).await
}

/// Removes every row and restarts the id sequence
pub async fn truncate(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Truncating currency table");
    run(pool, "TRUNCATE TABLE currency RESTART IDENTITY").await
}

async fn run(pool: &PgPool, sql: &str) -> Result<(), DatabaseError> {
    sqlx::raw_sql(sql)
        .execute(pool)
        .await
        .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_unique_iso_codes() {
        assert!(CURRENCY_SCHEMA.contains("iso_code        CHAR(3)        NOT NULL UNIQUE"));
        assert!(CURRENCY_SCHEMA.contains("iso_code_num    CHAR(3)        NOT NULL UNIQUE"));
    }

    #[test]
    fn test_conversion_rate_column_keeps_full_scale() {
        let column = CURRENCY_SCHEMA
            .lines()
            .find(|line| line.trim_start().starts_with("conversion_rate"))
            .unwrap();
        assert!(column.contains("NUMERIC "), "{}", column);
        assert!(!column.contains("NUMERIC("), "rate column must not fix a scale: {}", column);
    }

    #[test]
    fn test_seed_contains_reference_currencies() {
        for code in ["'EUR'", "'USD'", "'JPY'"] {
            assert!(CURRENCY_SEED.contains(code), "missing {}", code);
        }
    }
}
