//! Resource caching for sharing parsers and scorers across pipelines.
//!
//! Loading a lexicon or a parser is the expensive part of building a
//! pipeline; analyzing text with them is cheap and stateless. This cache
//! keeps one `Arc` per (type, options) pair so that several pipelines built
//! with the same options reuse the same instance.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::error::Result;

type CacheStorage = HashMap<(TypeId, String), Arc<dyn Any + Send + Sync>>;

/// A thread-safe cache of loaded resources.
pub struct ResourceCache {
    cache: Mutex<CacheStorage>,
}

impl ResourceCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn storage(&self) -> MutexGuard<'_, CacheStorage> {
        // A panic inside a loader never leaves a half-written entry behind.
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get a resource from the cache, or load and store it.
    ///
    /// The loader runs outside the lock, so two threads racing on the same
    /// key may both load; the first one stored wins and both get that instance.
    pub fn get_or_load<T, F>(&self, key: &str, loader: F) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T>,
    {
        let cache_key = (TypeId::of::<T>(), key.to_string());

        if let Some(cached) = self.storage().get(&cache_key) {
            if let Ok(resource) = Arc::clone(cached).downcast::<T>() {
                tracing::trace!(key, "resource cache hit");
                return Ok(resource);
            }
        }

        let loaded = Arc::new(loader()?);

        let mut storage = self.storage();
        let entry = storage
            .entry(cache_key)
            .or_insert_with(|| Arc::clone(&loaded) as Arc<dyn Any + Send + Sync>);
        Ok(Arc::clone(entry).downcast::<T>().unwrap_or(loaded))
    }

    /// Drop every cached resource. Pipelines already built keep theirs.
    pub fn clear(&self) {
        self.storage().clear();
    }

    pub fn len(&self) -> usize {
        self.storage().len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage().is_empty()
    }
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_RESOURCE_CACHE: once_cell::sync::Lazy<ResourceCache> =
    once_cell::sync::Lazy::new(ResourceCache::new);

/// Get a reference to the process-wide resource cache.
pub fn global_cache() -> &'static ResourceCache {
    &GLOBAL_RESOURCE_CACHE
}
