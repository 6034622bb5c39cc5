//! In-memory asset resolver
//!
//! Serves byte buffers registered at runtime. An optional artificial latency
//! makes it useful for exercising concurrent loads.

use crate::constants::MEMORY_LATENCY_MS_KEY;
use crate::utils::HandleLedger;
use async_trait::async_trait;
use bakery_application::ports::registry::{
    ASSET_RESOLVERS, AssetResolverEntry, ResolverProviderConfig,
};
use bakery_domain::cancellation::run_cancellable;
use bakery_domain::error::{Error, Result};
use bakery_domain::ports::AssetResolver;
use bakery_domain::value_objects::RawHandle;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Resolver backed by a concurrent map of address → bytes
#[derive(Debug, Default)]
pub struct MemoryAssetResolver {
    assets: DashMap<String, Vec<u8>>,
    latency: Option<Duration>,
    resolves: AtomicUsize,
    ledger: HandleLedger,
}

impl MemoryAssetResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every resolve by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Create a resolver from registry configuration
    pub fn from_config(config: &ResolverProviderConfig) -> Result<Self> {
        let resolver = Self::new();
        match config.extra.get(MEMORY_LATENCY_MS_KEY) {
            Some(raw) => {
                let millis: u64 = raw.parse().map_err(|_| {
                    Error::configuration(format!(
                        "{MEMORY_LATENCY_MS_KEY} must be an integer, got '{raw}'"
                    ))
                })?;
                Ok(resolver.with_latency(Duration::from_millis(millis)))
            }
            None => Ok(resolver),
        }
    }

    /// Register (or replace) the bytes served for `address`
    pub fn insert(&self, address: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.assets.insert(address.into(), data.into());
    }

    /// Builder form of [`MemoryAssetResolver::insert`]
    pub fn with_asset(self, address: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(address, data);
        self
    }

    /// Remove the bytes served for `address`
    pub fn remove(&self, address: &str) -> bool {
        self.assets.remove(address).is_some()
    }

    /// Number of `resolve` calls so far, including failed ones
    pub fn resolve_count(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }

    /// Handles handed out and not yet released
    pub fn outstanding_handles(&self) -> usize {
        self.ledger.outstanding()
    }
}

#[async_trait]
impl AssetResolver for MemoryAssetResolver {
    async fn resolve(&self, address: &str, cancel: &CancellationToken) -> Result<RawHandle> {
        self.resolves.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            run_cancellable(cancel, "resolve", async {
                tokio::time::sleep(latency).await;
                Ok(())
            })
            .await?;
        } else if cancel.is_cancelled() {
            return Err(Error::cancelled("resolve"));
        }

        // Clone out of the map guard before building the handle
        let data = self
            .assets
            .get(address)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found(format!("asset '{address}'")))?;

        let handle = RawHandle::new(address, data);
        self.ledger.issue(&handle);
        Ok(handle)
    }

    fn release(&self, handle: RawHandle) {
        self.ledger.release(&handle);
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(ASSET_RESOLVERS)]
static MEMORY_RESOLVER: AssetResolverEntry = AssetResolverEntry {
    name: "memory",
    description: "Serves byte buffers registered at runtime",
    factory: |config: &ResolverProviderConfig| Ok(Arc::new(MemoryAssetResolver::from_config(config)?)),
};
