//! Configuration management
//!
//! Layered configuration: defaults, then a TOML file, then `BAKERY_*`
//! environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, BakerConfig, LoaderConfig, LoggingConfig, ResolverConfig};
