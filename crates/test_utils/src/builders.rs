//! Test Data Builders
//!
//! Builds currencies with sensible defaults so tests only spell out the
//! fields they care about.

use core_kernel::{
    Currency, CurrencyFactory, CurrencyId, CurrencyParameters, NameContext, SymbolType,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Builder for constructing test currencies
///
/// Defaults to an unsaved Swiss franc.
pub struct TestCurrencyBuilder {
    id: CurrencyId,
    iso_code: String,
    numeric_iso_code: String,
    decimal_digits: u32,
    names: BTreeMap<NameContext, String>,
    symbols: BTreeMap<SymbolType, String>,
    conversion_rate: Decimal,
    active: bool,
}

impl Default for TestCurrencyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCurrencyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        let mut names = BTreeMap::new();
        names.insert(NameContext::Default, "Swiss Franc".to_string());
        let mut symbols = BTreeMap::new();
        symbols.insert(SymbolType::Default, "CHF".to_string());
        symbols.insert(SymbolType::Narrow, "CHF".to_string());

        Self {
            id: CurrencyId::UNASSIGNED,
            iso_code: "CHF".to_string(),
            numeric_iso_code: "756".to_string(),
            decimal_digits: 2,
            names,
            symbols,
            conversion_rate: Decimal::ONE,
            active: true,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = CurrencyId::new(id);
        self
    }

    /// Sets the alphabetic and numeric ISO codes
    pub fn with_iso_code(mut self, iso_code: &str, numeric_iso_code: &str) -> Self {
        self.iso_code = iso_code.to_string();
        self.numeric_iso_code = numeric_iso_code.to_string();
        self
    }

    pub fn with_decimal_digits(mut self, digits: u32) -> Self {
        self.decimal_digits = digits;
        self
    }

    /// Sets the name for the `default` context
    pub fn with_name(mut self, name: &str) -> Self {
        self.names.insert(NameContext::Default, name.to_string());
        self
    }

    /// Sets the name for a count context
    pub fn with_name_for(mut self, context: NameContext, name: &str) -> Self {
        self.names.insert(context, name.to_string());
        self
    }

    pub fn with_symbols(mut self, default: &str, narrow: &str) -> Self {
        self.symbols.insert(SymbolType::Default, default.to_string());
        self.symbols.insert(SymbolType::Narrow, narrow.to_string());
        self
    }

    /// Removes every symbol
    pub fn without_symbols(mut self) -> Self {
        self.symbols.clear();
        self
    }

    pub fn with_conversion_rate(mut self, rate: Decimal) -> Self {
        self.conversion_rate = rate;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Returns the parameters without building
    pub fn parameters(self) -> CurrencyParameters {
        CurrencyParameters::new()
            .id(self.id)
            .iso_code(self.iso_code)
            .numeric_iso_code(self.numeric_iso_code)
            .decimal_digits(self.decimal_digits)
            .display_names(self.names)
            .symbols(self.symbols)
            .conversion_rate(self.conversion_rate)
            .active(self.active)
    }

    /// Builds the currency
    ///
    /// # Panics
    ///
    /// Panics if the configured values are rejected by the factory
    pub fn build(self) -> Currency {
        CurrencyFactory::build(self.parameters()).expect("Invalid test currency")
    }
}
