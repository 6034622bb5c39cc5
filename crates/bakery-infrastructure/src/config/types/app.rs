//! Main application configuration

use super::{LoaderConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration of a Bakery context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Loading controller configuration
    #[serde(default)]
    pub loader: LoaderConfig,
}
