//! Repository layers backed by the database
//!
//! Each repository maps between database rows and domain types and plugs
//! into a `RepositoryChain` as its store of record.

pub mod currency;

pub use currency::DatabaseRepository;
