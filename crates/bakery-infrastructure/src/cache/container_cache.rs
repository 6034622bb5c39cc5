//! Concurrent container cache
//!
//! A `DashMap` from key to baked container. Reads never block on a load;
//! writes only happen from the loading controller after a successful bake.

use bakery_domain::ports::SheetContainer;
use bakery_domain::value_objects::AddressKey;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A baked container together with its bookkeeping
#[derive(Clone)]
pub struct CachedContainer {
    key: AddressKey,
    value: Arc<dyn SheetContainer>,
    baked_at: DateTime<Utc>,
}

impl CachedContainer {
    /// Key the container is cached under
    pub fn key(&self) -> &AddressKey {
        &self.key
    }

    /// Shared container instance
    pub fn value(&self) -> &Arc<dyn SheetContainer> {
        &self.value
    }

    /// When the container finished baking
    pub fn baked_at(&self) -> DateTime<Utc> {
        self.baked_at
    }
}

impl fmt::Debug for CachedContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedContainer")
            .field("key", &self.key)
            .field("baked_at", &self.baked_at)
            .finish_non_exhaustive()
    }
}

/// Run the disposal contract of a container, if it has one
pub fn dispose_container(container: &dyn SheetContainer) {
    if let Some(disposable) = container.as_disposable() {
        disposable.dispose();
    }
}

/// Thread-safe key → container map
#[derive(Default)]
pub struct ContainerCache {
    entries: DashMap<AddressKey, CachedContainer>,
}

impl ContainerCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached container for `key`, if any
    pub fn try_get(&self, key: &AddressKey) -> Option<Arc<dyn SheetContainer>> {
        self.entries
            .get(key)
            .map(|entry| Arc::clone(&entry.value().value))
    }

    /// Cache entry (with bookkeeping) for `key`, if any
    pub fn entry(&self, key: &AddressKey) -> Option<CachedContainer> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// True if `key` is cached
    pub fn contains(&self, key: &AddressKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite; returns the replaced container
    pub fn insert(
        &self,
        key: AddressKey,
        value: Arc<dyn SheetContainer>,
    ) -> Option<Arc<dyn SheetContainer>> {
        let cached = CachedContainer {
            key: key.clone(),
            value,
            baked_at: Utc::now(),
        };
        self.entries.insert(key, cached).map(|prior| prior.value)
    }

    /// Remove `key`, returning the prior container
    ///
    /// The caller decides whether to run the disposal contract.
    pub fn remove(&self, key: &AddressKey) -> Option<Arc<dyn SheetContainer>> {
        self.entries.remove(key).map(|(_, prior)| prior.value)
    }

    /// Remove every entry, disposing disposable containers; returns the count
    pub fn clear(&self) -> usize {
        // Keys are collected first so disposal never runs under a shard lock
        let keys: Vec<AddressKey> = self.entries.iter().map(|e| e.key().clone()).collect();
        let mut removed = 0;
        for key in keys {
            if let Some(container) = self.remove(&key) {
                dispose_container(container.as_ref());
                removed += 1;
            }
        }
        debug!(removed, "Container cache cleared");
        removed
    }

    /// Number of cached containers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys currently cached
    pub fn keys(&self) -> Vec<AddressKey> {
        self.entries.iter().map(|e| e.key().clone()).collect()
    }
}

impl fmt::Debug for ContainerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerCache")
            .field("len", &self.len())
            .finish()
    }
}
