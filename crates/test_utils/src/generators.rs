//! Property-Based Test Generators
//!
//! Proptest strategies for currencies that satisfy the factory's rules.

use core_kernel::{Currency, CurrencyFactory, CurrencyId, CurrencyParameters, NameContext, SymbolType};
use proptest::collection::btree_map;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Strategy for assigned currency ids
pub fn assigned_id_strategy() -> impl Strategy<Value = CurrencyId> {
    (1i64..1_000_000i64).prop_map(CurrencyId::new)
}

/// Strategy for ids that are not assigned (zero or negative)
pub fn unassigned_id_strategy() -> impl Strategy<Value = CurrencyId> {
    (-1_000i64..=0i64).prop_map(CurrencyId::new)
}

/// Strategy for three upper-case ASCII letters
pub fn iso_code_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// Strategy for three ASCII digits, leading zeros included
pub fn numeric_iso_code_strategy() -> impl Strategy<Value = String> {
    "[0-9]{3}"
}

/// Strategy for strictly positive conversion rates with up to 12 decimals
pub fn conversion_rate_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64, 0u32..=12u32).prop_map(|(m, s)| Decimal::new(m, s))
}

pub fn name_context_strategy() -> impl Strategy<Value = NameContext> {
    prop_oneof![
        Just(NameContext::Default),
        Just(NameContext::One),
        Just(NameContext::Other),
    ]
}

pub fn symbol_type_strategy() -> impl Strategy<Value = SymbolType> {
    prop_oneof![Just(SymbolType::Default), Just(SymbolType::Narrow)]
}

fn localized_names_strategy() -> impl Strategy<Value = BTreeMap<NameContext, String>> {
    btree_map(name_context_strategy(), "[A-Za-z ]{1,20}", 0..=3)
}

fn symbols_strategy() -> impl Strategy<Value = BTreeMap<SymbolType, String>> {
    btree_map(symbol_type_strategy(), "[^\\s]{1,4}", 0..=2)
}

/// Strategy for currencies carrying `id`
pub fn currency_with_id_strategy(
    id: impl Strategy<Value = CurrencyId>,
) -> impl Strategy<Value = Currency> {
    (
        id,
        iso_code_strategy(),
        numeric_iso_code_strategy(),
        0u32..=4u32,
        localized_names_strategy(),
        symbols_strategy(),
        conversion_rate_strategy(),
        any::<bool>(),
    )
        .prop_filter_map(
            "factory rejected generated currency",
            |(id, iso, numeric, digits, names, symbols, rate, active)| {
                CurrencyFactory::build(
                    CurrencyParameters::new()
                        .id(id)
                        .iso_code(iso)
                        .numeric_iso_code(numeric)
                        .decimal_digits(digits)
                        .display_names(names)
                        .symbols(symbols)
                        .conversion_rate(rate)
                        .active(active),
                )
                .ok()
            },
        )
}

/// Strategy for currencies with an assigned id
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    currency_with_id_strategy(assigned_id_strategy())
}
