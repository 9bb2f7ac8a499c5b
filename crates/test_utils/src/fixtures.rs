//! Pre-built Test Fixtures
//!
//! Reference currencies matching `migrations/seed_currency.sql`, plus the
//! database rows for them.

use core_kernel::{Currency, CurrencyId, NameContext, SymbolType};
use infra_db::CurrencyRow;
use rust_decimal_macros::dec;

use crate::builders::TestCurrencyBuilder;

/// Fixture for currency test data
pub struct CurrencyFixtures;

impl CurrencyFixtures {
    /// Euro, id 1, the reference currency
    pub fn eur() -> Currency {
        TestCurrencyBuilder::new()
            .with_id(1)
            .with_iso_code("EUR", "978")
            .with_name("Euro")
            .with_symbols("€", "€")
            .build()
    }

    /// US Dollar, id 2
    pub fn usd() -> Currency {
        TestCurrencyBuilder::new()
            .with_id(2)
            .with_iso_code("USD", "840")
            .with_name("US Dollar")
            .with_symbols("US$", "$")
            .with_conversion_rate(dec!(1.31))
            .build()
    }

    /// Japanese Yen, id 3, no minor unit
    pub fn jpy() -> Currency {
        TestCurrencyBuilder::new()
            .with_id(3)
            .with_iso_code("JPY", "392")
            .with_decimal_digits(0)
            .with_name("Japanese Yen")
            .with_symbols("¥", "¥")
            .with_conversion_rate(dec!(0.0068))
            .build()
    }

    /// Dollar as installed in the chain composition regression
    pub fn composition_dollar() -> Currency {
        TestCurrencyBuilder::new()
            .with_id(2)
            .with_iso_code("USD", "840")
            .with_name("Dollar")
            .with_symbols("$", "$")
            .build()
    }

    /// Every seeded currency, ordered by id
    pub fn seeded() -> Vec<Currency> {
        vec![Self::eur(), Self::usd(), Self::jpy()]
    }
}

/// Database row holding the persisted fields of `currency`
pub fn row_for(currency: &Currency) -> CurrencyRow {
    CurrencyRow {
        id: currency.id().value(),
        iso_code: currency.iso_code().to_string(),
        iso_code_num: currency.numeric_iso_code().to_string(),
        decimals: currency.decimal_digits() as i32,
        name: currency
            .name(NameContext::Default)
            .map(str::to_string)
            .unwrap_or_default(),
        symbol: currency.symbol(SymbolType::Default).ok().map(str::to_string),
        symbol_narrow: currency.symbol(SymbolType::Narrow).ok().map(str::to_string),
        conversion_rate: currency.conversion_rate(),
        active: currency.is_active(),
    }
}

/// Id no fixture uses
pub fn unknown_id() -> CurrencyId {
    CurrencyId::new(999)
}
