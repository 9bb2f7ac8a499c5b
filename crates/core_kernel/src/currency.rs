//! Installed currency value object
//!
//! A `Currency` describes one monetary unit the shop knows about: its ISO 4217
//! codes, formatting precision, localized symbols and names, and its conversion
//! rate against the shop's reference currency.
//!
//! Instances are produced by [`CurrencyFactory`](crate::factory::CurrencyFactory)
//! and are only mutated through the repository chain.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::LocalizationError;
use crate::identifiers::CurrencyId;

/// Display context for a currency symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolType {
    /// Unambiguous symbol, e.g. "US$"
    Default,
    /// Shortest symbol, e.g. "$"
    Narrow,
}

impl SymbolType {
    pub const ALL: [SymbolType; 2] = [SymbolType::Default, SymbolType::Narrow];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolType::Default => "default",
            SymbolType::Narrow => "narrow",
        }
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolType {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SymbolType::Default),
            "narrow" => Ok(SymbolType::Narrow),
            other => Err(LocalizationError::InvalidSymbolType(other.to_string())),
        }
    }
}

/// Pluralization context for a currency name
///
/// "Used currency is Dollar" (default), "I need one dollar" (one),
/// "I need five dollars" (other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameContext {
    Default,
    One,
    Other,
}

impl NameContext {
    pub const ALL: [NameContext; 3] = [NameContext::Default, NameContext::One, NameContext::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameContext::Default => "default",
            NameContext::One => "one",
            NameContext::Other => "other",
        }
    }
}

impl fmt::Display for NameContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameContext {
    type Err = LocalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(NameContext::Default),
            "one" => Ok(NameContext::One),
            "other" => Ok(NameContext::Other),
            other => Err(LocalizationError::InvalidCountContext(other.to_string())),
        }
    }
}

/// An installed currency
///
/// Fields are private; construction goes through the factory so that the
/// ISO code formats and the positive conversion rate are always checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub(crate) id: CurrencyId,
    pub(crate) iso_code: String,
    pub(crate) numeric_iso_code: String,
    pub(crate) decimal_digits: u32,
    pub(crate) symbols: BTreeMap<SymbolType, String>,
    pub(crate) names: BTreeMap<NameContext, String>,
    pub(crate) conversion_rate: Decimal,
    pub(crate) is_active: bool,
}

impl Currency {
    /// Returns the store-assigned identity
    pub fn id(&self) -> CurrencyId {
        self.id
    }

    /// Returns the alphabetic ISO 4217 code
    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    /// Returns the numeric ISO 4217 code
    pub fn numeric_iso_code(&self) -> &str {
        &self.numeric_iso_code
    }

    /// Number of fractional digits used when formatting amounts
    pub fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }

    pub fn conversion_rate(&self) -> Decimal {
        self.conversion_rate
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn symbols(&self) -> &BTreeMap<SymbolType, String> {
        &self.symbols
    }

    pub fn names(&self) -> &BTreeMap<NameContext, String> {
        &self.names
    }

    /// Returns the symbol for a display context
    ///
    /// # Errors
    ///
    /// Returns `LocalizationError::InvalidSymbolType` if this currency has no
    /// symbol for the context.
    pub fn symbol(&self, symbol_type: SymbolType) -> Result<&str, LocalizationError> {
        self.symbols
            .get(&symbol_type)
            .map(String::as_str)
            .ok_or_else(|| LocalizationError::InvalidSymbolType(symbol_type.to_string()))
    }

    /// Returns the symbol for a display context given by name
    pub fn symbol_for(&self, symbol_type: &str) -> Result<&str, LocalizationError> {
        self.symbol(symbol_type.parse()?)
    }

    /// Returns the name for a pluralization context
    ///
    /// # Errors
    ///
    /// Returns `LocalizationError::InvalidCountContext` if this currency has
    /// no name for the context.
    pub fn name(&self, context: NameContext) -> Result<&str, LocalizationError> {
        self.names
            .get(&context)
            .map(String::as_str)
            .ok_or_else(|| LocalizationError::InvalidCountContext(context.to_string()))
    }

    /// Returns the name for a pluralization context given by name
    pub fn name_for(&self, context: &str) -> Result<&str, LocalizationError> {
        self.name(context.parse()?)
    }

    /// Returns a copy of this currency carrying the given identity
    pub fn with_id(mut self, id: CurrencyId) -> Self {
        self.id = id;
        self
    }

    /// Converts an amount in this currency to the shop's reference currency
    pub fn to_reference_amount(&self, amount: Decimal) -> Decimal {
        amount * self.conversion_rate
    }

    /// Converts an amount in the shop's reference currency to this currency
    pub fn from_reference_amount(&self, amount: Decimal) -> Decimal {
        // conversion_rate > 0 is guaranteed by the factory
        amount / self.conversion_rate
    }

    /// Rounds an amount to this currency's precision
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.decimal_digits, RoundingStrategy::MidpointNearestEven)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.iso_code, self.numeric_iso_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{CurrencyFactory, CurrencyParameters};
    use rust_decimal_macros::dec;

    fn dollar() -> Currency {
        CurrencyFactory::build(
            CurrencyParameters::new()
                .id(CurrencyId::new(2))
                .iso_code("USD")
                .numeric_iso_code("840")
                .decimal_digits(2)
                .display_name("Dollar")
                .symbol("US$", "$")
                .conversion_rate(dec!(1.31)),
        )
        .unwrap()
    }

    #[test]
    fn test_symbol_lookup() {
        let usd = dollar();
        assert_eq!(usd.symbol(SymbolType::Default).unwrap(), "US$");
        assert_eq!(usd.symbol(SymbolType::Narrow).unwrap(), "$");
        assert_eq!(usd.symbol_for("narrow").unwrap(), "$");
    }

    #[test]
    fn test_unknown_symbol_type_fails() {
        let usd = dollar();
        assert_eq!(
            usd.symbol_for("wide"),
            Err(LocalizationError::InvalidSymbolType("wide".to_string()))
        );
    }

    #[test]
    fn test_missing_name_context_fails() {
        let usd = dollar();
        assert_eq!(usd.name(NameContext::Default).unwrap(), "Dollar");
        assert_eq!(
            usd.name(NameContext::Other),
            Err(LocalizationError::InvalidCountContext("other".to_string()))
        );
        assert!(usd.name_for("few").is_err());
    }

    #[test]
    fn test_reference_conversion() {
        let usd = dollar();
        assert_eq!(usd.to_reference_amount(dec!(100)), dec!(131.00));
        assert_eq!(usd.from_reference_amount(dec!(131)), dec!(100));
    }

    #[test]
    fn test_round_uses_precision() {
        let usd = dollar();
        assert_eq!(usd.round(dec!(10.125)), dec!(10.12));
        assert_eq!(usd.round(dec!(10.135)), dec!(10.14));
    }

    #[test]
    fn test_with_id_keeps_data() {
        let usd = dollar();
        let moved = usd.clone().with_id(CurrencyId::new(9));
        assert_eq!(moved.id(), CurrencyId::new(9));
        assert_eq!(moved.iso_code(), usd.iso_code());
        assert_eq!(moved.names(), usd.names());
    }
}
