//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for collaborators.
//! Uses the `linkme` crate for compile-time registration of resolvers,
//! bakers and container types that are discovered and instantiated at
//! runtime without any type scanning.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(RESOLVERS)]  │
//! │                        static ENTRY: AssetResolverEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static RESOLVERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  RESOLVERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = filesystem" → Filesystem...  │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in bakery-providers)
//!
//! ```ignore
//! use bakery_application::ports::registry::{AssetResolverEntry, ASSET_RESOLVERS};
//!
//! #[linkme::distributed_slice(ASSET_RESOLVERS)]
//! static FILESYSTEM_RESOLVER: AssetResolverEntry = AssetResolverEntry {
//!     name: "filesystem",
//!     description: "Reads container assets below a root directory",
//!     factory: |config| Ok(Arc::new(FilesystemAssetResolver::from_config(config)?)),
//! };
//! ```
//!
//! ### Registering a Container Type
//!
//! ```ignore
//! bakery_application::register_container!(GameData, "Items, quests and drop tables");
//! ```

pub mod baker;
pub mod container;
pub mod resolver;

pub use baker::{
    BakerProviderConfig, DATA_BAKERS, DataBakerEntry, list_data_bakers, resolve_data_baker,
};
pub use container::{
    CONTAINER_TYPES, ContainerConstructor, ContainerRegistry, ContainerTypeEntry,
    list_container_types,
};
pub use resolver::{
    ASSET_RESOLVERS, AssetResolverEntry, ResolverProviderConfig, list_asset_resolvers,
    resolve_asset_resolver,
};
