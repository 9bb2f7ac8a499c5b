//! Installed Currency Domain
//!
//! This crate defines how installed currencies are looked up and written
//! across several storage backends composed into a chain.
//!
//! # Repository Chain
//!
//! Each backend is a [`CurrencyRepository`] layer that only knows how to
//! act on its own storage. A [`RepositoryChain`] orders the layers:
//!
//! - **Reads** walk the layers head to tail and stop at the first hit.
//!   A miss on every layer is `Ok(None)`, not an error.
//! - **Writes** fan out to every layer. `add` and `update` run tail to head
//!   (store of record first) and hand each layer the currency returned by
//!   the previous one, so an identity assigned by the database reaches the
//!   cache. `delete` runs head to tail, invalidating caches first.
//!
//! A cache layer must be followed by a persistent layer or by nothing.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_currency::{CacheRepository, RepositoryChain};
//!
//! let chain = RepositoryChain::builder()
//!     .layer(Arc::new(CacheRepository::new(cache_store)))
//!     .layer(Arc::new(database_repository))
//!     .build()?;
//!
//! let usd = chain.get_by_id(CurrencyId::new(2)).await?;
//! ```

pub mod error;
pub mod repository;
pub mod chain;
pub mod cache;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{RepositoryError, WriteOperation};
pub use repository::{CurrencyRepository, LayerKind};
pub use chain::{RepositoryChain, RepositoryChainBuilder};
pub use cache::{CacheRepository, CacheStore, CachedCurrency, CachedSymbol};
