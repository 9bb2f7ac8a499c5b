//! Identifiers for installed currencies
//!
//! The store of record hands out positive integer keys. Anything else
//! (zero or negative) means the currency has not been persisted yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary key of an installed currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyId(i64);

impl CurrencyId {
    /// Identity of a currency the store has not seen yet
    pub const UNASSIGNED: CurrencyId = CurrencyId(0);

    /// Wraps a raw key
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw key
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns true once the store of record has assigned this identity
    pub const fn is_assigned(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CurrencyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for CurrencyId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<CurrencyId> for i64 {
    fn from(id: CurrencyId) -> i64 {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_identity() {
        assert!(!CurrencyId::UNASSIGNED.is_assigned());
        assert!(!CurrencyId::new(-4).is_assigned());
        assert!(CurrencyId::new(1).is_assigned());
    }

    #[test]
    fn test_parse_and_display() {
        let id: CurrencyId = " 42 ".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<CurrencyId>().is_err());
    }
}
