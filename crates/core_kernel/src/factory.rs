//! Currency factory
//!
//! Builds [`Currency`] values from a parameter bag. Both the cache layer and the
//! database layer go through here, so every currency in the system has passed
//! the same checks.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::currency::{Currency, NameContext, SymbolType};
use crate::error::CoreError;
use crate::identifiers::CurrencyId;

/// Parameters for building a currency
///
/// # Example
///
/// ```rust
/// use core_kernel::{CurrencyFactory, CurrencyParameters, CurrencyId};
///
/// let euro = CurrencyFactory::build(
///     CurrencyParameters::new()
///         .id(CurrencyId::new(1))
///         .iso_code("EUR")
///         .numeric_iso_code("978")
///         .decimal_digits(2)
///         .display_name("Euro")
///         .symbol("€", "€"),
/// ).unwrap();
/// assert_eq!(euro.iso_code(), "EUR");
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyParameters {
    id: CurrencyId,
    iso_code: Option<String>,
    numeric_iso_code: Option<String>,
    decimal_digits: u32,
    names: BTreeMap<NameContext, String>,
    symbols: BTreeMap<SymbolType, String>,
    conversion_rate: Decimal,
    is_active: bool,
}

impl CurrencyParameters {
    /// Creates an empty parameter bag
    pub fn new() -> Self {
        Self {
            id: CurrencyId::UNASSIGNED,
            iso_code: None,
            numeric_iso_code: None,
            decimal_digits: 2,
            names: BTreeMap::new(),
            symbols: BTreeMap::new(),
            conversion_rate: Decimal::ONE,
            is_active: true,
        }
    }

    pub fn id(mut self, id: CurrencyId) -> Self {
        self.id = id;
        self
    }

    pub fn iso_code(mut self, code: impl Into<String>) -> Self {
        self.iso_code = Some(code.into());
        self
    }

    pub fn numeric_iso_code(mut self, code: impl Into<String>) -> Self {
        self.numeric_iso_code = Some(code.into());
        self
    }

    pub fn decimal_digits(mut self, digits: u32) -> Self {
        self.decimal_digits = digits;
        self
    }

    /// Sets the name for the `default` context only
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(NameContext::Default, name.into());
        self
    }

    /// Replaces all names
    pub fn display_names(mut self, names: BTreeMap<NameContext, String>) -> Self {
        self.names = names;
        self
    }

    /// Sets the default and narrow symbols
    pub fn symbol(mut self, default: impl Into<String>, narrow: impl Into<String>) -> Self {
        self.symbols.insert(SymbolType::Default, default.into());
        self.symbols.insert(SymbolType::Narrow, narrow.into());
        self
    }

    /// Replaces all symbols
    pub fn symbols(mut self, symbols: BTreeMap<SymbolType, String>) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn conversion_rate(mut self, rate: Decimal) -> Self {
        self.conversion_rate = rate;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl Default for CurrencyParameters {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds currencies from parameters
pub struct CurrencyFactory;

impl CurrencyFactory {
    /// Builds a currency, validating ISO codes and the conversion rate
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if:
    /// - the alphabetic code is missing or is not three ASCII letters
    /// - the numeric code is missing or is not three ASCII digits
    /// - the conversion rate is not strictly positive
    pub fn build(params: CurrencyParameters) -> Result<Currency, CoreError> {
        let iso_code = params
            .iso_code
            .ok_or_else(|| CoreError::validation("ISO code is required"))?;
        let iso_code = iso_code.trim().to_ascii_uppercase();
        if iso_code.len() != 3 || !iso_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::validation(format!(
                "Invalid ISO 4217 alphabetic code: '{}'",
                iso_code
            )));
        }

        let numeric_iso_code = params
            .numeric_iso_code
            .ok_or_else(|| CoreError::validation("Numeric ISO code is required"))?;
        let numeric_iso_code = numeric_iso_code.trim().to_string();
        if numeric_iso_code.len() != 3 || !numeric_iso_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::validation(format!(
                "Invalid ISO 4217 numeric code: '{}'",
                numeric_iso_code
            )));
        }

        if params.conversion_rate <= Decimal::ZERO {
            return Err(CoreError::validation(format!(
                "Conversion rate must be positive, got {}",
                params.conversion_rate
            )));
        }

        Ok(Currency {
            id: params.id,
            iso_code,
            numeric_iso_code,
            decimal_digits: params.decimal_digits,
            symbols: params.symbols,
            names: params.names,
            conversion_rate: params.conversion_rate,
            is_active: params.is_active,
        })
    }
}
