//! # Bakery - Provider Implementations
//!
//! Concrete collaborators for the loading controller. Each provider
//! implements a port defined in `bakery-domain` and registers itself in a
//! linkme registry declared by `bakery-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Asset resolvers | `AssetResolver` | Filesystem, Memory, Null |
//! | Data bakers | `DataBaker` | Json, Toml |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! bakery-providers = { version = "0.1", default-features = false, features = ["baker-json"] }
//! ```

// Re-export bakery-domain types commonly used with providers
pub use bakery_domain::error::{Error, Result};
pub use bakery_domain::ports::{AssetResolver, DataBaker};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Asset resolver implementations
pub mod resolver;

/// Data baker implementations
pub mod baker;

pub use resolver::{FilesystemAssetResolver, MemoryAssetResolver, NullAssetResolver};
#[cfg(feature = "baker-json")]
pub use baker::JsonDataBaker;
#[cfg(feature = "baker-toml")]
pub use baker::TomlDataBaker;
