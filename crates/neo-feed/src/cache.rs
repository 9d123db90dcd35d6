//! Injectable response caches.
//!
//! The client never reaches for global storage: whichever [`Cache`] it is
//! built with is the only place responses are kept.
//!
//! # Implementations
//!
//! - [`MemoryCache`]: In-memory cache with optional time-to-live and size limit
//! - [`NoCache`]: Passthrough implementation that caches nothing

use crate::error::{Error, Result};
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
    time::Duration,
};
use web_time::Instant;

/// Future type for cache get operations.
pub type GetFuture<'a> = Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>>> + Send + 'a>>;

/// Future type for cache put/remove operations.
pub type CacheFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

/// A cache for response bodies, keyed by request URL.
pub trait Cache: Send + Sync {
    /// Get a fresh body from the cache.
    ///
    /// Returns `Ok(None)` if nothing is stored or the entry has expired.
    fn get(&self, url: &str) -> GetFuture<'_>;

    /// Store a body for later retrieval.
    fn put(&self, url: &str, data: Vec<u8>) -> CacheFuture<'_>;

    /// Remove a body from the cache.
    fn remove(&self, url: &str) -> CacheFuture<'_>;

    /// Clear all cached data.
    fn clear(&self) -> CacheFuture<'_>;
}

/// A cache that stores nothing (passthrough).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl Cache for NoCache {
    fn get(&self, _url: &str) -> GetFuture<'_> {
        Box::pin(async { Ok(None) })
    }

    fn put(&self, _url: &str, _data: Vec<u8>) -> CacheFuture<'_> {
        Box::pin(async { Ok(()) })
    }

    fn remove(&self, _url: &str) -> CacheFuture<'_> {
        Box::pin(async { Ok(()) })
    }

    fn clear(&self) -> CacheFuture<'_> {
        Box::pin(async { Ok(()) })
    }
}

/// An in-memory cache.
///
/// Entries older than the time-to-live are treated as missing and dropped
/// on access. With a size limit, the oldest entries are evicted first.
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    inner: Arc<RwLock<MemoryCacheInner>>,
    ttl: Option<Duration>,
    max_size: Option<usize>,
}

#[derive(Debug, Default)]
struct MemoryCacheInner {
    entries: HashMap<String, Entry>,
    /// Insertion order for eviction.
    order: Vec<String>,
    current_size: usize,
}

#[derive(Debug)]
struct Entry {
    data: Vec<u8>,
    stored_at: Instant,
}

impl MemoryCacheInner {
    fn remove(&mut self, url: &str) {
        if let Some(entry) = self.entries.remove(url) {
            self.current_size -= entry.data.len();
            self.order.retain(|k| k != url);
        }
    }
}

fn poisoned(operation: &'static str) -> Error {
    Error::Cache {
        operation,
        message: "lock poisoned".to_string(),
    }
}

impl MemoryCache {
    /// Create a cache that keeps entries forever.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache whose entries expire after `ttl`.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            ..Self::default()
        }
    }

    /// Limit the total size of cached bodies in bytes.
    #[must_use]
    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Current size of cached bodies in bytes.
    pub fn size(&self) -> Result<usize> {
        let inner = self.inner.read().map_err(|_| poisoned("size"))?;
        Ok(inner.current_size)
    }

    /// Number of cached entries, expired ones included until touched.
    pub fn len(&self) -> Result<usize> {
        let inner = self.inner.read().map_err(|_| poisoned("len"))?;
        Ok(inner.entries.len())
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn is_expired(&self, entry: &Entry) -> bool {
        self.ttl.is_some_and(|ttl| entry.stored_at.elapsed() >= ttl)
    }

    fn get_sync(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let mut inner = self.inner.write().map_err(|_| poisoned("get"))?;
        let expired = match inner.entries.get(url) {
            None => return Ok(None),
            Some(entry) => self.is_expired(entry),
        };
        if expired {
            inner.remove(url);
            return Ok(None);
        }
        Ok(inner.entries.get(url).map(|entry| entry.data.clone()))
    }

    fn put_sync(&self, url: &str, data: Vec<u8>) -> Result<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned("put"))?;
        inner.remove(url);

        let data_size = data.len();
        if let Some(max_size) = self.max_size {
            while inner.current_size + data_size > max_size && !inner.order.is_empty() {
                let oldest = inner.order.remove(0);
                if let Some(entry) = inner.entries.remove(&oldest) {
                    inner.current_size -= entry.data.len();
                }
            }
        }

        inner.entries.insert(
            url.to_string(),
            Entry {
                data,
                stored_at: Instant::now(),
            },
        );
        inner.order.push(url.to_string());
        inner.current_size += data_size;
        Ok(())
    }
}

impl Cache for MemoryCache {
    fn get(&self, url: &str) -> GetFuture<'_> {
        let result = self.get_sync(url);
        Box::pin(async move { result })
    }

    fn put(&self, url: &str, data: Vec<u8>) -> CacheFuture<'_> {
        let result = self.put_sync(url, data);
        Box::pin(async move { result })
    }

    fn remove(&self, url: &str) -> CacheFuture<'_> {
        let result = self
            .inner
            .write()
            .map(|mut inner| inner.remove(url))
            .map_err(|_| poisoned("remove"));
        Box::pin(async move { result })
    }

    fn clear(&self) -> CacheFuture<'_> {
        let result = self
            .inner
            .write()
            .map(|mut inner| *inner = MemoryCacheInner::default())
            .map_err(|_| poisoned("clear"));
        Box::pin(async move { result })
    }
}
