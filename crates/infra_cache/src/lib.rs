//! Cache infrastructure
//!
//! Provides [`MemoryCacheStore`], a bounded in-process key-value store that
//! backs the currency cache layer.

pub mod error;
pub mod memory;

pub use error::CacheError;
pub use memory::MemoryCacheStore;
