//! Installed currency administration binary
//!
//! # Usage
//!
//! ```bash
//! currency-admin test-db create
//! currency-admin test-db restore
//! currency-admin currency show 2
//! currency-admin health
//! ```
//!
//! # Environment Variables
//!
//! * `CURRENCY_DATABASE_URL` - PostgreSQL connection string
//! * `CURRENCY_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `CURRENCY_CACHE_CAPACITY` - Maximum cached currencies (default: 256)
//! * `CURRENCY_MAX_CONNECTIONS` - Pool size (default: 5)
//! * `CURRENCY_CONNECT_TIMEOUT_SECS` - Connection timeout (default: 30)

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use interface_cli::{run, BlockStyle, Cli, CliConfig, CommandContext};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env().context("failed to load CURRENCY_* configuration")?;

    init_tracing(&config.log_level);

    let mut ctx = CommandContext::new(config, std::io::stdout());
    match run(cli.command, &mut ctx).await {
        Ok(outcome) => Ok(ExitCode::from(outcome.code())),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            ctx.display_block(&e.to_string(), BlockStyle::Error)?;
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays clean.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
