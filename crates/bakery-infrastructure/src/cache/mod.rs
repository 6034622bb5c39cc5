//! Container cache
//!
//! The durable store of completed loads, keyed by [`AddressKey`](bakery_domain::AddressKey).

pub mod container_cache;

pub use container_cache::{CachedContainer, ContainerCache, dispose_container};
