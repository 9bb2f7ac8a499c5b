//! Custom Test Assertions
//!
//! Helpers comparing currencies field by field, with messages naming the
//! field that differs.

use core_kernel::{Currency, NameContext, SymbolType};

/// Asserts that two currencies carry the same data
///
/// Compares iso code, numeric code, decimal digits, names and symbols.
/// Ids are not compared.
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_same_currency_data(actual: &Currency, expected: &Currency) {
    assert_eq!(actual.iso_code(), expected.iso_code(), "iso code differs");
    assert_eq!(
        actual.numeric_iso_code(),
        expected.numeric_iso_code(),
        "numeric iso code differs for {}",
        expected.iso_code()
    );
    assert_eq!(
        actual.decimal_digits(),
        expected.decimal_digits(),
        "decimal digits differ for {}",
        expected.iso_code()
    );
    assert_eq!(actual.names(), expected.names(), "names differ for {}", expected.iso_code());
    assert_eq!(
        actual.symbols(),
        expected.symbols(),
        "symbols differ for {}",
        expected.iso_code()
    );
}

/// Asserts the fields the database persists: [`assert_same_currency_data`]
/// restricted to the `default` name, plus rate and active flag
pub fn assert_same_persisted_data(actual: &Currency, expected: &Currency) {
    assert_eq!(actual.iso_code(), expected.iso_code(), "iso code differs");
    assert_eq!(actual.numeric_iso_code(), expected.numeric_iso_code());
    assert_eq!(actual.decimal_digits(), expected.decimal_digits());
    assert_eq!(
        actual.name(NameContext::Default).ok(),
        expected.name(NameContext::Default).ok(),
        "default name differs for {}",
        expected.iso_code()
    );
    for symbol_type in SymbolType::ALL {
        assert_eq!(
            actual.symbol(symbol_type).ok(),
            expected.symbol(symbol_type).ok(),
            "{} symbol differs for {}",
            symbol_type,
            expected.iso_code()
        );
    }
    assert_eq!(actual.conversion_rate(), expected.conversion_rate());
    assert_eq!(actual.is_active(), expected.is_active());
}
