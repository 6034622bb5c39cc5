//! Filesystem asset resolver
//!
//! Maps a logical address such as `Sheets/Items` onto `<root>/Sheets/Items.json`
//! and reads it through `tokio::fs`. Addresses may not escape the root.

use crate::constants::FILESYSTEM_DEFAULT_EXTENSION;
use crate::utils::HandleLedger;
use async_trait::async_trait;
use bakery_application::ports::registry::{
    ASSET_RESOLVERS, AssetResolverEntry, ResolverProviderConfig,
};
use bakery_domain::cancellation::run_cancellable;
use bakery_domain::error::{Error, Result};
use bakery_domain::ports::AssetResolver;
use bakery_domain::value_objects::RawHandle;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Resolver reading container assets from a directory tree
#[derive(Debug)]
pub struct FilesystemAssetResolver {
    root: PathBuf,
    extension: String,
    ledger: HandleLedger,
}

impl FilesystemAssetResolver {
    /// Create a resolver rooted at `root` using the default extension
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: FILESYSTEM_DEFAULT_EXTENSION.to_string(),
            ledger: HandleLedger::new(),
        }
    }

    /// Use `extension` for addresses that carry none
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Create a resolver from registry configuration
    pub fn from_config(config: &ResolverProviderConfig) -> Result<Self> {
        let root = config.root.clone().ok_or_else(|| {
            Error::configuration("filesystem resolver requires a root directory")
        })?;
        let resolver = Self::new(root);
        Ok(match &config.extension {
            Some(extension) => resolver.with_extension(extension.as_str()),
            None => resolver,
        })
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Handles handed out and not yet released
    pub fn outstanding_handles(&self) -> usize {
        self.ledger.outstanding()
    }

    /// File path an address maps to
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for absolute addresses or addresses containing `..`.
    pub fn path_for(&self, address: &str) -> Result<PathBuf> {
        let relative = Path::new(address);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(Error::invalid_argument(format!(
                "Address '{address}' must stay below the asset root"
            )));
        }

        let mut path = self.root.join(relative);
        if path.extension().is_none() && !self.extension.is_empty() {
            path.set_extension(&self.extension);
        }
        Ok(path)
    }
}

#[async_trait]
impl AssetResolver for FilesystemAssetResolver {
    async fn resolve(&self, address: &str, cancel: &CancellationToken) -> Result<RawHandle> {
        let path = self.path_for(address)?;
        let data = run_cancellable(cancel, "resolve", async {
            tokio::fs::read(&path).await.map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    Error::not_found(format!("asset '{address}' ({})", path.display()))
                }
                _ => Error::io_with_source(format!("Failed to read {}", path.display()), e),
            })
        })
        .await?;

        let mut handle = RawHandle::new(address, data);
        if let Some(format) = path.extension().and_then(|e| e.to_str()) {
            handle = handle.with_format(format);
        }
        debug!(
            address,
            path = %path.display(),
            bytes = handle.len(),
            "Asset resolved from filesystem"
        );
        self.ledger.issue(&handle);
        Ok(handle)
    }

    fn release(&self, handle: RawHandle) {
        self.ledger.release(&handle);
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(ASSET_RESOLVERS)]
static FILESYSTEM_RESOLVER: AssetResolverEntry = AssetResolverEntry {
    name: "filesystem",
    description: "Reads container assets below a root directory",
    factory: |config: &ResolverProviderConfig| {
        Ok(Arc::new(FilesystemAssetResolver::from_config(config)?))
    },
};
