//! Asset Resolver Registry
//!
//! Auto-registration system for asset resolvers.
//! Resolvers register themselves via `linkme::distributed_slice` and are
//! selected by name from configuration.

use bakery_domain::error::{Error, Result};
use bakery_domain::ports::AssetResolver;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for asset resolver creation
///
/// Contains all configuration options that a resolver might need.
/// Resolvers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ResolverProviderConfig {
    /// Provider name (e.g., "filesystem", "memory", "null")
    pub provider: String,
    /// Root directory for file based resolvers
    pub root: Option<PathBuf>,
    /// Extension appended to addresses that have none
    pub extension: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl ResolverProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the root directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the default extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for asset resolvers
pub struct AssetResolverEntry {
    /// Unique provider name (e.g., "filesystem", "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create resolver instances
    pub factory: fn(&ResolverProviderConfig) -> Result<Arc<dyn AssetResolver>>,
}

#[linkme::distributed_slice]
pub static ASSET_RESOLVERS: [AssetResolverEntry] = [..];

/// Resolve an asset resolver by name from the registry
///
/// # Errors
///
/// `Configuration` if no resolver with the configured name is registered,
/// or whatever the resolver's factory returns.
pub fn resolve_asset_resolver(config: &ResolverProviderConfig) -> Result<Arc<dyn AssetResolver>> {
    if let Some(entry) = ASSET_RESOLVERS.iter().find(|e| e.name == config.provider) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = ASSET_RESOLVERS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown asset resolver '{}'. Available resolvers: {:?}",
        config.provider, available
    )))
}

/// List all registered asset resolvers as (name, description) tuples
pub fn list_asset_resolvers() -> Vec<(&'static str, &'static str)> {
    ASSET_RESOLVERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
