//! Data Baker Port

use crate::error::Result;
use crate::ports::container::SheetContainer;
use crate::value_objects::RawHandle;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Data Baker Port
///
/// Populates an empty container from a raw handle. The baker only owns the
/// encoding (JSON, TOML, ...); the row schema belongs to the container.
/// Failures are opaque and get classified as `Bake` errors by the caller.
#[async_trait]
pub trait DataBaker: Send + Sync + std::fmt::Debug {
    /// Bake `container` from `raw` and hand it back populated
    async fn bake(
        &self,
        raw: &RawHandle,
        container: Box<dyn SheetContainer>,
        cancel: &CancellationToken,
    ) -> Result<Box<dyn SheetContainer>>;

    /// Get the name/identifier of this baker implementation
    fn baker_name(&self) -> &str;
}
