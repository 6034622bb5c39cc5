//! In-flight load tracking
//!
//! Every real load registers an [`InFlightLoad`] holding its own cancellation
//! token, so a single load can be aborted by key and disposal can cancel all of
//! them without touching the cache.

use bakery_domain::error::{Error, Result};
use bakery_domain::value_objects::AddressKey;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Bookkeeping of one running load
#[derive(Debug, Clone)]
pub struct InFlightLoad {
    key: AddressKey,
    cancellation: CancellationToken,
    started_at: DateTime<Utc>,
}

impl InFlightLoad {
    /// Key being loaded
    pub fn key(&self) -> &AddressKey {
        &self.key
    }

    /// Token observed by the load
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// When the load started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// Registry of loads currently in flight
#[derive(Debug, Default)]
pub struct LoadTracker {
    loads: DashMap<AddressKey, InFlightLoad>,
    idle: Notify,
}

impl LoadTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a load for `key`
    ///
    /// The load gets a child token of `parent`: cancelling the caller cancels
    /// the load, cancelling the load leaves the caller alone. The returned
    /// guard ends the entry when dropped.
    ///
    /// # Errors
    ///
    /// `AlreadyTracked` if `key` already has a running load.
    pub fn begin(&self, key: &AddressKey, parent: &CancellationToken) -> Result<TrackedLoad<'_>> {
        match self.loads.entry(key.clone()) {
            Entry::Occupied(_) => Err(Error::already_tracked(key.to_string())),
            Entry::Vacant(vacant) => {
                let cancellation = parent.child_token();
                vacant.insert(InFlightLoad {
                    key: key.clone(),
                    cancellation: cancellation.clone(),
                    started_at: Utc::now(),
                });
                trace!(key = %key, "Load tracked");
                Ok(TrackedLoad {
                    tracker: self,
                    key: key.clone(),
                    cancellation,
                })
            }
        }
    }

    /// Forget the load for `key`; true if one was tracked
    pub fn end(&self, key: &AddressKey) -> bool {
        let ended = self.loads.remove(key).is_some();
        if self.loads.is_empty() {
            self.idle.notify_waiters();
        }
        ended
    }

    /// Signal cancellation to the load for `key`; true if one was tracked
    pub fn cancel(&self, key: &AddressKey) -> bool {
        match self.loads.get(key) {
            Some(load) => {
                load.value().cancellation.cancel();
                debug!(key = %key, "In-flight load cancelled");
                true
            }
            None => false,
        }
    }

    /// Signal cancellation to every tracked load; returns how many were signalled
    pub fn cancel_all(&self) -> usize {
        let mut cancelled = 0;
        for load in &self.loads {
            load.value().cancellation.cancel();
            cancelled += 1;
        }
        if cancelled > 0 {
            debug!(cancelled, "All in-flight loads cancelled");
        }
        cancelled
    }

    /// Snapshot of the load for `key`
    pub fn get(&self, key: &AddressKey) -> Option<InFlightLoad> {
        self.loads.get(key).map(|load| load.value().clone())
    }

    /// True if `key` has a running load
    pub fn contains(&self, key: &AddressKey) -> bool {
        self.loads.contains_key(key)
    }

    /// Number of loads in flight
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// True when nothing is in flight
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Wait until no load is in flight
    pub async fn wait_idle(&self) {
        loop {
            // Registered before the check so an `end` in between is not missed
            let notified = self.idle.notified();
            if self.loads.is_empty() {
                return;
            }
            notified.await;
        }
    }
}

/// Scoped registration of one load; ends the tracker entry on drop
#[derive(Debug)]
pub struct TrackedLoad<'a> {
    tracker: &'a LoadTracker,
    key: AddressKey,
    cancellation: CancellationToken,
}

impl TrackedLoad<'_> {
    /// Key being loaded
    pub fn key(&self) -> &AddressKey {
        &self.key
    }

    /// Token the load must observe
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}

impl Drop for TrackedLoad<'_> {
    fn drop(&mut self) {
        self.tracker.end(&self.key);
    }
}
