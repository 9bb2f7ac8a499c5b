//! Core Kernel - Foundational types for installed currencies
//!
//! This crate provides the building blocks shared by every repository layer:
//! - The `Currency` value object and its localized lookups
//! - The `CurrencyFactory` that validates and builds currencies
//! - Port primitives (`PortError`, `DomainPort`, health checks)

pub mod currency;
pub mod factory;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use currency::{Currency, NameContext, SymbolType};
pub use factory::{CurrencyFactory, CurrencyParameters};
pub use identifiers::CurrencyId;
pub use error::{CoreError, LocalizationError};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
