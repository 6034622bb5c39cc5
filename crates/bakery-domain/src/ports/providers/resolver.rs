//! Asset Resolver Port

use crate::error::Result;
use crate::value_objects::RawHandle;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Asset Resolver Port
///
/// Turns a logical address into raw bytes. Every handle returned by
/// [`AssetResolver::resolve`] must be passed back to
/// [`AssetResolver::release`] exactly once.
///
/// # Implementations
///
/// - **Filesystem**: reads files below a root directory
/// - **Memory**: serves registered byte buffers
/// - **Null**: never finds anything
#[async_trait]
pub trait AssetResolver: Send + Sync + std::fmt::Debug {
    /// Resolve an address
    ///
    /// # Errors
    ///
    /// `NotFound` when the address does not exist, `Cancelled` when the token
    /// fires before the data is available.
    async fn resolve(&self, address: &str, cancel: &CancellationToken) -> Result<RawHandle>;

    /// Release a handle previously returned by `resolve`
    fn release(&self, handle: RawHandle);

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
