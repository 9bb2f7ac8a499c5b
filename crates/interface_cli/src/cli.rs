//! Command-line arguments

use clap::{Parser, Subcommand};

/// Installed currency administration
#[derive(Debug, Parser)]
#[command(name = "currency-admin")]
#[command(about = "Manage installed currencies and the test database", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the test database
    TestDb {
        /// Action to execute (allowed actions: create, restore)
        action: String,
    },

    /// Inspect installed currencies
    #[command(subcommand)]
    Currency(CurrencyCommand),

    /// Check the cache and database adapters
    Health,
}

#[derive(Debug, Subcommand)]
pub enum CurrencyCommand {
    /// Print a currency, reading through the cache
    Show {
        /// Currency id
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_test_db() {
        let cli = Cli::try_parse_from(["currency-admin", "test-db", "restore"]).unwrap();
        assert!(matches!(cli.command, Command::TestDb { action } if action == "restore"));
    }

    #[test]
    fn test_test_db_requires_action() {
        assert!(Cli::try_parse_from(["currency-admin", "test-db"]).is_err());
    }

    #[test]
    fn test_parse_currency_show() {
        let cli = Cli::try_parse_from(["currency-admin", "currency", "show", "2"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Currency(CurrencyCommand::Show { id }) if id == "2"
        ));
    }
}
