//! Command-line interface for installed currencies
//!
//! Provides the `currency-admin` binary:
//! - `test-db <create|restore>` prepares the test database
//! - `currency show <id>` reads a currency through the `[cache, database]` chain
//! - `health` reports adapter health
//!
//! Commands receive an explicit [`CommandContext`] holding the configuration
//! and the output writer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command, CurrencyCommand};
pub use commands::Outcome;
pub use config::CliConfig;
pub use error::CliError;
pub use output::{format_block, BlockStyle, CommandContext};

use std::io::Write;

use core_kernel::HealthCheckable;
use infra_cache::MemoryCacheStore;
use infra_db::{create_pool, PgCurrencyStore};

use commands::test_db::{PgTestDatabase, TestDbAction};

/// Runs a parsed command
///
/// Arguments are validated before any connection is opened.
pub async fn run<W: Write>(
    command: Command,
    ctx: &mut CommandContext<W>,
) -> Result<Outcome, CliError> {
    match command {
        Command::TestDb { action } => {
            let action: TestDbAction = action.parse()?;
            let pool = create_pool(ctx.config.database_config()).await?;
            let outcome = commands::test_db::execute(action, &PgTestDatabase::new(pool.clone()), ctx).await;
            pool.close().await;
            outcome
        }
        Command::Currency(CurrencyCommand::Show { id }) => {
            let id = commands::currency::parse_id(&id)?;
            let cache = MemoryCacheStore::new(ctx.config.cache_capacity)?;
            let pool = create_pool(ctx.config.database_config()).await?;
            let chain = commands::currency::build_chain(cache, PgCurrencyStore::new(pool.clone()))?;
            let outcome = commands::currency::show(id, &chain, ctx).await;
            pool.close().await;
            outcome
        }
        Command::Health => {
            let cache = MemoryCacheStore::new(ctx.config.cache_capacity)?;
            let pool = create_pool(ctx.config.database_config()).await?;
            let store = PgCurrencyStore::new(pool.clone());
            let adapters: [&dyn HealthCheckable; 2] = [&cache, &store];
            let outcome = commands::health::report(&adapters, ctx).await;
            pool.close().await;
            outcome
        }
    }
}
