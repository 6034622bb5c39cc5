//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `bakery_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bakery.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bakery";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "BAKERY";

/// Separator between nesting levels in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "BAKERY_LOG";

/// File stem used when the configured log path has none
pub const LOG_FILE_STEM: &str = "bakery";

// ============================================================================
// LOADER CONSTANTS
// ============================================================================

/// Resolver used when none is configured
pub const DEFAULT_RESOLVER: &str = "filesystem";

/// Asset root used by the default resolver
pub const DEFAULT_ASSET_ROOT: &str = "assets";

/// Baker used when none is configured
pub const DEFAULT_BAKER: &str = "json";

/// Default bound on waiting for in-flight loads during shutdown
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Component name reported in `Disposed` errors
pub const LOADING_CONTROLLER_COMPONENT: &str = "LoadingController";
