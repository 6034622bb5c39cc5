//! Container Loader Port
//!
//! Object-safe contract of a loading controller plus a typed extension trait
//! so callers can write `loader.load::<GameData>("Config", None)` against
//! either the concrete controller or an `Arc<dyn ContainerLoader>`.

use async_trait::async_trait;
use bakery_domain::error::{Error, Result};
use bakery_domain::ports::SheetContainer;
use bakery_domain::value_objects::{AddressKey, LoaderStats};
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Container Loader Port
///
/// Loads, caches and disposes containers by [`AddressKey`]. Implementations
/// guarantee at most one real load per key and never cache a failed or
/// cancelled load.
#[async_trait]
pub trait ContainerLoader: Send + Sync {
    /// Load (or return the cached) container for `key`
    async fn load_dyn(
        &self,
        key: AddressKey,
        cancel: Option<CancellationToken>,
    ) -> Result<Arc<dyn SheetContainer>>;

    /// True if `key` is cached
    fn is_loaded_key(&self, key: &AddressKey) -> Result<bool>;

    /// Evict one cached container, disposing it; true if it was cached
    fn evict_key(&self, key: &AddressKey) -> Result<bool>;

    /// Evict and dispose every cached container, returning how many were evicted
    fn evict_all(&self) -> Result<usize>;

    /// Signal cancellation to the in-flight load of `key`; true if one was running
    fn cancel_key(&self, key: &AddressKey) -> Result<bool>;

    /// Tear down the loader; idempotent
    fn dispose(&self);

    /// True once `dispose` has been called
    fn is_disposed(&self) -> bool;

    /// Number of cached containers
    fn cached_count(&self) -> usize;

    /// Number of loads currently in flight
    fn in_flight_count(&self) -> usize;

    /// Snapshot of the loader's counters
    fn stats(&self) -> LoaderStats;
}

/// Typed convenience API over any [`ContainerLoader`]
pub trait ContainerLoaderExt: ContainerLoader {
    /// Load the container of type `T` stored at `address`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty address, plus everything
    /// [`ContainerLoader::load_dyn`] can return.
    fn load<T: SheetContainer>(
        &self,
        address: &str,
        cancel: Option<&CancellationToken>,
    ) -> impl Future<Output = Result<Arc<T>>> + Send {
        let key = AddressKey::for_type::<T>(address);
        let cancel = cancel.cloned();
        async move {
            let key = key?;
            let container = self.load_dyn(key.clone(), cancel).await?;
            downcast_container::<T>(container, &key)
        }
    }

    /// True if the container of type `T` at `address` is cached
    fn is_loaded<T: SheetContainer>(&self, address: &str) -> Result<bool> {
        self.is_loaded_key(&AddressKey::for_type::<T>(address)?)
    }

    /// Evict the container of type `T` at `address`
    fn evict<T: SheetContainer>(&self, address: &str) -> Result<bool> {
        self.evict_key(&AddressKey::for_type::<T>(address)?)
    }

    /// Cancel the in-flight load of type `T` at `address`
    fn cancel_load<T: SheetContainer>(&self, address: &str) -> Result<bool> {
        self.cancel_key(&AddressKey::for_type::<T>(address)?)
    }
}

impl<L: ContainerLoader + ?Sized> ContainerLoaderExt for L {}

/// Downcast a shared container to its concrete type
///
/// # Errors
///
/// `Instantiation` when the cached instance is not a `T`.
pub fn downcast_container<T: SheetContainer>(
    container: Arc<dyn SheetContainer>,
    key: &AddressKey,
) -> Result<Arc<T>> {
    container.downcast_arc::<T>().map_err(|_| {
        Error::instantiation(
            key.container_type().name(),
            format!("cached instance for '{key}' has a different concrete type"),
        )
    })
}
