//! In-memory cache store with LRU eviction
//!
//! Entries may carry a time to live. Expired entries are dropped lazily when
//! they are next read.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use lru::LruCache;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable, PortError};
use domain_currency::CacheStore;

use crate::error::CacheError;

const ADAPTER_ID: &str = "memory-cache-store";

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Bounded key-value store kept in process memory
///
/// Clones share the same entries.
#[derive(Debug, Clone)]
pub struct MemoryCacheStore {
    entries: Arc<RwLock<LruCache<String, CacheEntry>>>,
    ttl: Option<Duration>,
}

impl MemoryCacheStore {
    /// Creates a store holding at most `capacity` entries
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ZeroCapacity` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(CacheError::ZeroCapacity)?;
        Ok(Self {
            entries: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl: None,
        })
    }

    /// Expires every entry `ttl` after it was written
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Number of entries currently held, including expired ones not yet read
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>, PortError> {
        // LRU reads update recency, so they need the write lock
        let mut entries = self.entries.write().await;

        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                debug!(key, "Cache entry expired");
                entries.pop(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set_item(&self, key: &str, value: Vec<u8>) -> Result<(), PortError> {
        let mut entries = self.entries.write().await;
        if let Some((evicted, _)) = entries.push(key.to_string(), CacheEntry::new(value, self.ttl)) {
            if evicted != key {
                debug!(key = %evicted, "Evicted least recently used cache entry");
            }
        }
        Ok(())
    }

    async fn delete_item(&self, key: &str) -> Result<bool, PortError> {
        Ok(self.entries.write().await.pop(key).is_some())
    }
}

#[async_trait]
impl HealthCheckable for MemoryCacheStore {
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let (len, capacity) = {
            let entries = self.entries.read().await;
            (entries.len(), entries.cap().get())
        };

        let status = if len < capacity {
            AdapterHealth::Healthy
        } else {
            // Full: every write now evicts
            AdapterHealth::Degraded
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms: start.elapsed().as_millis() as u64,
            message: Some(format!("{}/{} entries", len, capacity)),
            checked_at: Utc::now(),
        }
    }
}
