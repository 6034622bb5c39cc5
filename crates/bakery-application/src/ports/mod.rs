//! Application ports
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`loader`] | `ContainerLoader` port and `ContainerLoaderExt` typed API |
//! | [`registry`] | Auto-registration of resolvers, bakers and container types |

pub mod loader;
pub mod registry;

pub use loader::{ContainerLoader, ContainerLoaderExt};
pub use registry::{
    ASSET_RESOLVERS, AssetResolverEntry, BakerProviderConfig, CONTAINER_TYPES,
    ContainerConstructor, ContainerRegistry, ContainerTypeEntry, DATA_BAKERS, DataBakerEntry,
    ResolverProviderConfig, list_asset_resolvers, list_container_types, list_data_bakers,
    resolve_asset_resolver, resolve_data_baker,
};
