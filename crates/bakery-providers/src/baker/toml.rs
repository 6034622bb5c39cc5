//! TOML data baker

use super::bake_document;
use crate::constants::FORMAT_TOML;
use async_trait::async_trait;
use bakery_application::ports::registry::{BakerProviderConfig, DATA_BAKERS, DataBakerEntry};
use bakery_domain::error::{Error, Result};
use bakery_domain::ports::{DataBaker, SheetContainer};
use bakery_domain::value_objects::RawHandle;
use bakery_domain::SheetDocument;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Baker parsing TOML assets
#[derive(Debug, Clone, Default)]
pub struct TomlDataBaker;

impl TomlDataBaker {
    /// Create a new TOML baker
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DataBaker for TomlDataBaker {
    async fn bake(
        &self,
        raw: &RawHandle,
        container: Box<dyn SheetContainer>,
        cancel: &CancellationToken,
    ) -> Result<Box<dyn SheetContainer>> {
        if cancel.is_cancelled() {
            return Err(Error::cancelled("bake"));
        }
        let document: SheetDocument = ::toml::from_str(raw.as_str()?).map_err(|e| {
            Error::bake_with_source(format!("Asset '{}' is not valid TOML", raw.address()), e)
        })?;
        trace!(address = raw.address(), bytes = raw.len(), "TOML asset parsed");
        bake_document(container, document, cancel)
    }

    fn baker_name(&self) -> &str {
        FORMAT_TOML
    }
}

#[linkme::distributed_slice(DATA_BAKERS)]
static TOML_BAKER: DataBakerEntry = DataBakerEntry {
    name: "toml",
    description: "Parses TOML assets into sheet documents",
    factory: |_config: &BakerProviderConfig| Ok(Arc::new(TomlDataBaker::new())),
};
