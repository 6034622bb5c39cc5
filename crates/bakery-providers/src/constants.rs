//! Provider Constants
//!
//! Constants specific to provider implementations. Domain constants live in
//! `bakery_domain::constants`.

// ============================================================================
// RESOLVER CONSTANTS
// ============================================================================

/// Extra config key holding the simulated latency of the memory resolver
pub const MEMORY_LATENCY_MS_KEY: &str = "latency_ms";

/// Extension used by the filesystem resolver when none is configured
pub const FILESYSTEM_DEFAULT_EXTENSION: &str = "json";

// ============================================================================
// BAKER CONSTANTS
// ============================================================================

/// Format hint reported for JSON assets
pub const FORMAT_JSON: &str = "json";

/// Format hint reported for TOML assets
pub const FORMAT_TOML: &str = "toml";
