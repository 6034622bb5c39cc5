//! Data Baker Implementations
//!
//! Bakers parse a raw handle into a [`SheetDocument`](bakery_domain::SheetDocument)
//! and let the container bind it to its own rows.

#[cfg(feature = "baker-json")]
pub mod json;
#[cfg(feature = "baker-toml")]
pub mod toml;

#[cfg(feature = "baker-json")]
pub use json::JsonDataBaker;
#[cfg(feature = "baker-toml")]
pub use self::toml::TomlDataBaker;

use bakery_domain::error::{Error, Result};
use bakery_domain::ports::SheetContainer;
use bakery_domain::SheetDocument;
use tokio_util::sync::CancellationToken;

/// Bind a parsed document into `container`, honouring cancellation first
pub(crate) fn bake_document(
    mut container: Box<dyn SheetContainer>,
    document: SheetDocument,
    cancel: &CancellationToken,
) -> Result<Box<dyn SheetContainer>> {
    if cancel.is_cancelled() {
        return Err(Error::cancelled("bake"));
    }
    container.bake(document)?;
    Ok(container)
}
