//! Data Baker Registry
//!
//! Auto-registration system for data bakers.

use bakery_domain::error::{Error, Result};
use bakery_domain::ports::DataBaker;
use std::collections::HashMap;
use std::sync::Arc;

/// Configuration for data baker creation
#[derive(Debug, Clone, Default)]
pub struct BakerProviderConfig {
    /// Baker name (e.g., "json", "toml")
    pub provider: String,
    /// Additional baker-specific configuration
    pub extra: HashMap<String, String>,
}

impl BakerProviderConfig {
    /// Create a new config with the given baker name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for data bakers
pub struct DataBakerEntry {
    /// Unique baker name (e.g., "json", "toml")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create baker instances
    pub factory: fn(&BakerProviderConfig) -> Result<Arc<dyn DataBaker>>,
}

#[linkme::distributed_slice]
pub static DATA_BAKERS: [DataBakerEntry] = [..];

/// Resolve a data baker by name from the registry
pub fn resolve_data_baker(config: &BakerProviderConfig) -> Result<Arc<dyn DataBaker>> {
    if let Some(entry) = DATA_BAKERS.iter().find(|e| e.name == config.provider) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = DATA_BAKERS.iter().map(|e| e.name).collect();
    Err(Error::configuration(format!(
        "Unknown data baker '{}'. Available bakers: {:?}",
        config.provider, available
    )))
}

/// List all registered data bakers as (name, description) tuples
pub fn list_data_bakers() -> Vec<(&'static str, &'static str)> {
    DATA_BAKERS.iter().map(|e| (e.name, e.description)).collect()
}
