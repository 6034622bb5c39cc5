//! Null asset resolver for testing
//!
//! A resolver that never finds anything. Useful for testing failure paths
//! and for running without any asset source configured.

use async_trait::async_trait;
use bakery_application::ports::registry::{
    ASSET_RESOLVERS, AssetResolverEntry, ResolverProviderConfig,
};
use bakery_domain::error::{Error, Result};
use bakery_domain::ports::AssetResolver;
use bakery_domain::value_objects::RawHandle;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Null resolver that fails every lookup with `NotFound`
#[derive(Debug, Clone, Default)]
pub struct NullAssetResolver;

impl NullAssetResolver {
    /// Create a new null resolver
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AssetResolver for NullAssetResolver {
    async fn resolve(&self, address: &str, cancel: &CancellationToken) -> Result<RawHandle> {
        if cancel.is_cancelled() {
            return Err(Error::cancelled("resolve"));
        }
        Err(Error::not_found(format!("asset '{address}'")))
    }

    fn release(&self, _handle: RawHandle) {}

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(ASSET_RESOLVERS)]
static NULL_RESOLVER: AssetResolverEntry = AssetResolverEntry {
    name: "null",
    description: "Resolver that never finds anything (testing)",
    factory: |_config: &ResolverProviderConfig| Ok(Arc::new(NullAssetResolver::new())),
};
