//! Loading controller configuration types

use crate::constants::{
    DEFAULT_ASSET_ROOT, DEFAULT_BAKER, DEFAULT_RESOLVER, DEFAULT_SHUTDOWN_TIMEOUT_SECS,
};
use bakery_application::ports::registry::{BakerProviderConfig, ResolverProviderConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Asset resolver selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Registered resolver name (filesystem, memory, null)
    pub provider: String,
    /// Root directory for file based resolvers
    pub root: Option<PathBuf>,
    /// Extension appended to addresses that have none
    pub extension: Option<String>,
    /// Provider-specific settings
    pub extra: HashMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_RESOLVER.to_string(),
            root: Some(PathBuf::from(DEFAULT_ASSET_ROOT)),
            extension: None,
            extra: HashMap::new(),
        }
    }
}

impl From<&ResolverConfig> for ResolverProviderConfig {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            provider: config.provider.clone(),
            root: config.root.clone(),
            extension: config.extension.clone(),
            extra: config.extra.clone(),
        }
    }
}

/// Data baker selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BakerConfig {
    /// Registered baker name (json, toml)
    pub provider: String,
    /// Provider-specific settings
    pub extra: HashMap<String, String>,
}

impl Default for BakerConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_BAKER.to_string(),
            extra: HashMap::new(),
        }
    }
}

impl From<&BakerConfig> for BakerProviderConfig {
    fn from(config: &BakerConfig) -> Self {
        Self {
            provider: config.provider.clone(),
            extra: config.extra.clone(),
        }
    }
}

/// Loading controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Asset resolver selection
    pub resolver: ResolverConfig,
    /// Data baker selection
    pub baker: BakerConfig,
    /// Upper bound on waiting for in-flight loads during shutdown
    pub shutdown_timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            baker: BakerConfig::default(),
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}

impl LoaderConfig {
    /// Shutdown timeout as a `Duration`
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
