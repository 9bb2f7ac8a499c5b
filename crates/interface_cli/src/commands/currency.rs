//! Currency lookup through the repository chain

use std::io::Write;
use std::sync::Arc;
use tracing::info;

use core_kernel::{Currency, CurrencyId, NameContext, SymbolType};
use domain_currency::{CacheRepository, CacheStore, RepositoryChain};
use infra_db::{CurrencyStore, DatabaseRepository};

use super::Outcome;
use crate::error::CliError;
use crate::output::{BlockStyle, CommandContext};

/// Builds the chain `[cache, database]`
pub fn build_chain<C, D>(cache: C, database: D) -> Result<RepositoryChain, CliError>
where
    C: CacheStore,
    D: CurrencyStore,
{
    Ok(RepositoryChain::builder()
        .layer(Arc::new(CacheRepository::new(cache)))
        .layer(Arc::new(DatabaseRepository::new(database)))
        .build()?)
}

/// Parses a currency id given on the command line
pub fn parse_id(raw: &str) -> Result<CurrencyId, CliError> {
    raw.parse::<CurrencyId>()
        .map_err(|_| CliError::InvalidId(raw.to_string()))
}

/// Prints the currency stored under `id`
pub async fn show<W: Write>(
    id: CurrencyId,
    chain: &RepositoryChain,
    ctx: &mut CommandContext<W>,
) -> Result<Outcome, CliError> {
    info!(currency_id = %id, layers = ?chain.layer_names(), "Looking up currency");

    match chain.get_by_id(id).await? {
        Some(currency) => {
            for line in describe(&currency) {
                ctx.writeln(&line)?;
            }
            Ok(Outcome::Success)
        }
        None => {
            ctx.display_block(&format!("Currency {} not found.", id), BlockStyle::Error)?;
            Ok(Outcome::Failure)
        }
    }
}

fn describe(currency: &Currency) -> Vec<String> {
    let mut lines = vec![format!("Currency #{} {}", currency.id(), currency)];

    lines.push(format!("  decimals:        {}", currency.decimal_digits()));
    for context in NameContext::ALL {
        if let Ok(name) = currency.name(context) {
            lines.push(format!("  name ({}):{}{}", context, pad(context.as_str()), name));
        }
    }
    for symbol_type in SymbolType::ALL {
        if let Ok(symbol) = currency.symbol(symbol_type) {
            lines.push(format!("  symbol ({}):{}{}", symbol_type, pad(symbol_type.as_str()), symbol));
        }
    }
    lines.push(format!("  conversion rate: {}", currency.conversion_rate()));
    lines.push(format!(
        "  active:          {}",
        if currency.is_active() { "yes" } else { "no" }
    ));
    lines
}

// Aligns "name (ctx):" and "symbol (ctx):" labels with the other fields
fn pad(context: &str) -> String {
    " ".repeat(8usize.saturating_sub(context.len()).max(1))
}
