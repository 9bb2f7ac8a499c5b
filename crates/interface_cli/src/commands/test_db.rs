//! Test database management
//!
//! `create` builds the schema and loads the reference currencies;
//! `restore` empties the table and reloads them.

use async_trait::async_trait;
use sqlx::PgPool;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::{error, info};

use infra_db::{schema, DatabaseError};

use super::Outcome;
use crate::error::CliError;
use crate::output::{BlockStyle, CommandContext};

/// Allowed `test-db` actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDbAction {
    Create,
    Restore,
}

impl TestDbAction {
    pub const ALL: [TestDbAction; 2] = [TestDbAction::Create, TestDbAction::Restore];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestDbAction::Create => "create",
            TestDbAction::Restore => "restore",
        }
    }

    /// Comma-separated list of the allowed actions
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(TestDbAction::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TestDbAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestDbAction {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| CliError::InvalidAction {
                action: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

/// Operations for preparing the test database
#[async_trait]
pub trait TestDatabaseUtility: Send + Sync {
    /// Creates the schema from scratch and loads reference data
    async fn create_test_db(&self) -> Result<(), DatabaseError>;

    /// Resets the contents to the reference data
    async fn restore_test_db(&self) -> Result<(), DatabaseError>;
}

/// [`TestDatabaseUtility`] for a PostgreSQL database
#[derive(Debug, Clone)]
pub struct PgTestDatabase {
    pool: PgPool,
}

impl PgTestDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestDatabaseUtility for PgTestDatabase {
    async fn create_test_db(&self) -> Result<(), DatabaseError> {
        schema::drop_schema(&self.pool).await?;
        schema::apply_schema(&self.pool).await?;
        schema::seed(&self.pool).await
    }

    async fn restore_test_db(&self) -> Result<(), DatabaseError> {
        schema::truncate(&self.pool).await?;
        schema::seed(&self.pool).await
    }
}

/// Runs `action` and reports the result as a message block
///
/// A failing utility is reported on the output and yields
/// `Outcome::Failure`; only output errors are returned as `Err`.
pub async fn execute<W: Write>(
    action: TestDbAction,
    utility: &dyn TestDatabaseUtility,
    ctx: &mut CommandContext<W>,
) -> Result<Outcome, CliError> {
    info!(%action, "Running test database action");

    let result = match action {
        TestDbAction::Create => utility.create_test_db().await,
        TestDbAction::Restore => utility.restore_test_db().await,
    };

    match result {
        Ok(()) => {
            ctx.display_block(
                &format!("{} test database action succeeded.", action),
                BlockStyle::Info,
            )?;
            Ok(Outcome::Success)
        }
        Err(e) => {
            error!(%action, error = %e, "Test database action failed");
            ctx.display_block(&e.to_string(), BlockStyle::Error)?;
            Ok(Outcome::Failure)
        }
    }
}
