//! Loading controller
//!
//! Owns the cache, the tracker and the gate, and drives the
//! resolve → bake → verify → cache pipeline for a cache miss. Cleanup of the
//! tracker entry, the gate permit and the resolver handle is tied to scoped
//! guards, so every exit path (success, error, cancellation, a dropped future)
//! leaves the bookkeeping consistent.

use crate::cache::{ContainerCache, dispose_container};
use crate::config::LoaderConfig;
use crate::constants::LOADING_CONTROLLER_COMPONENT;
use crate::loading::gate::SingleFlightGate;
use crate::loading::tracker::LoadTracker;
use async_trait::async_trait;
use bakery_application::ports::loader::ContainerLoader;
use bakery_application::ports::registry::{
    ContainerRegistry, resolve_asset_resolver, resolve_data_baker,
};
use bakery_domain::cancellation::run_cancellable;
use bakery_domain::error::{Error, Result};
use bakery_domain::ports::{AssetResolver, DataBaker, SheetContainer};
use bakery_domain::value_objects::{AddressKey, LoaderStats, RawHandle};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Span, debug, info, info_span, warn};

#[derive(Debug, Default)]
struct LoadCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    loads: AtomicU64,
    failures: AtomicU64,
    cancellations: AtomicU64,
}

impl LoadCounters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn record_error(&self, err: &Error) {
        if err.is_cancelled() {
            Self::bump(&self.cancellations);
        } else if !err.is_disposed() {
            Self::bump(&self.failures);
        }
    }
}

/// Hands a raw handle back to its resolver when dropped
struct HeldHandle<'a> {
    resolver: &'a dyn AssetResolver,
    handle: Option<RawHandle>,
}

impl<'a> HeldHandle<'a> {
    fn new(resolver: &'a dyn AssetResolver, handle: RawHandle) -> Self {
        Self {
            resolver,
            handle: Some(handle),
        }
    }

    fn get(&self) -> Result<&RawHandle> {
        self.handle
            .as_ref()
            .ok_or_else(|| Error::internal("resolver handle already released"))
    }
}

impl Drop for HeldHandle<'_> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.resolver.release(handle);
        }
    }
}

/// Single-flight, cancellable loader of sheet containers
///
/// # Example
///
/// ```ignore
/// use bakery_application::ports::ContainerLoaderExt;
///
/// let controller = LoadingController::new(resolver, baker, registry);
/// let data = controller.load::<GameData>("Config", None).await?;
/// assert!(controller.is_loaded::<GameData>("Config")?);
/// controller.dispose();
/// ```
pub struct LoadingController {
    resolver: Arc<dyn AssetResolver>,
    baker: Arc<dyn DataBaker>,
    registry: ContainerRegistry,
    cache: ContainerCache,
    tracker: LoadTracker,
    gate: SingleFlightGate,
    disposed: AtomicBool,
    counters: LoadCounters,
}

impl LoadingController {
    /// Create a controller from explicit collaborators
    pub fn new(
        resolver: Arc<dyn AssetResolver>,
        baker: Arc<dyn DataBaker>,
        registry: ContainerRegistry,
    ) -> Self {
        debug!(
            resolver = resolver.provider_name(),
            baker = baker.baker_name(),
            container_types = registry.len(),
            "Loading controller created"
        );
        Self {
            resolver,
            baker,
            registry,
            cache: ContainerCache::new(),
            tracker: LoadTracker::new(),
            gate: SingleFlightGate::new(),
            disposed: AtomicBool::new(false),
            counters: LoadCounters::default(),
        }
    }

    /// Create a controller whose collaborators are selected by name
    ///
    /// # Errors
    ///
    /// `Configuration` for unknown resolver or baker names, or whatever their
    /// factories return.
    pub fn from_config(config: &LoaderConfig, registry: ContainerRegistry) -> Result<Self> {
        let resolver = resolve_asset_resolver(&(&config.resolver).into())?;
        let baker = resolve_data_baker(&(&config.baker).into())?;
        Ok(Self::new(resolver, baker, registry))
    }

    /// Container types this controller can instantiate
    pub fn registry(&self) -> &ContainerRegistry {
        &self.registry
    }

    /// Loaded container for `key`, loading it on a miss
    ///
    /// Without a token the load can still be aborted through
    /// [`ContainerLoader::cancel_key`] or disposal.
    ///
    /// # Errors
    ///
    /// `Disposed` after teardown, `Cancelled` if the token fires, otherwise
    /// the resolver, instantiation or bake failure. A failed load caches
    /// nothing.
    pub async fn load_key(
        &self,
        key: AddressKey,
        cancel: Option<CancellationToken>,
    ) -> Result<Arc<dyn SheetContainer>> {
        self.ensure_active()?;

        if let Some(hit) = self.cache.try_get(&key) {
            LoadCounters::bump(&self.counters.hits);
            debug!(key = %key, "Container cache hit");
            return Ok(hit);
        }

        let span = info_span!(
            "load",
            container = key.container_type().short_name(),
            address = key.address()
        );
        let cancel = cancel.unwrap_or_default();
        let result = self
            .load_through_gate(&key, &cancel, &span)
            .instrument(span.clone())
            .await;
        if let Err(err) = &result {
            self.counters.record_error(err);
            if err.is_cancelled() {
                info!(key = %key, "Container load cancelled");
            } else {
                warn!(key = %key, error = %err, "Container load failed");
            }
        }
        result
    }

    async fn load_through_gate(
        &self,
        key: &AddressKey,
        cancel: &CancellationToken,
        span: &Span,
    ) -> Result<Arc<dyn SheetContainer>> {
        let _permit = self.gate.acquire(cancel).await.map_err(|err| {
            if err.is_disposed() {
                Error::disposed(LOADING_CONTROLLER_COMPONENT)
            } else {
                err
            }
        })?;
        self.ensure_active()?;

        // Another caller may have finished this key while we waited
        if let Some(hit) = self.cache.try_get(key) {
            LoadCounters::bump(&self.counters.hits);
            debug!("Container cached while waiting for the gate");
            return Ok(hit);
        }
        LoadCounters::bump(&self.counters.misses);

        // Declared after the permit so it is dropped first
        let tracked = self.tracker.begin(key, cancel)?;
        let started = Instant::now();
        info!("Loading container");

        let container: Arc<dyn SheetContainer> =
            Arc::from(self.materialize(key, tracked.cancellation(), span).await?);

        self.cache.insert(key.clone(), Arc::clone(&container));
        if self.disposed.load(Ordering::SeqCst) {
            // Disposal ran while this load was finishing; do not outlive it
            if let Some(orphan) = self.cache.remove(key) {
                dispose_container(orphan.as_ref());
            }
            return Err(Error::disposed(LOADING_CONTROLLER_COMPONENT));
        }

        LoadCounters::bump(&self.counters.loads);
        info!(
            elapsed_ms = started.elapsed().as_millis(),
            "Container loaded"
        );
        Ok(container)
    }

    async fn materialize(
        &self,
        key: &AddressKey,
        cancel: &CancellationToken,
        span: &Span,
    ) -> Result<Box<dyn SheetContainer>> {
        let container_name = key.container_type().short_name();
        let empty = self.registry.create(key.container_type(), span)?;

        let raw = run_cancellable(
            cancel,
            "resolve",
            self.resolver.resolve(key.address(), cancel),
        )
        .await?;
        let held = HeldHandle::new(self.resolver.as_ref(), raw);
        let raw = held.get()?;
        debug!(handle = raw.id(), bytes = raw.len(), "Asset resolved");

        let baked = run_cancellable(cancel, "bake", self.baker.bake(raw, empty, cancel))
            .await
            .map_err(|err| err.into_bake_error(container_name))?;
        // Released right after baking
        drop(held);

        if let Err(err) = baked.verify() {
            dispose_container(baked.as_ref());
            return Err(err.into_bake_error(container_name));
        }
        Ok(baked)
    }

    fn ensure_active(&self) -> Result<()> {
        if self.disposed.load(Ordering::SeqCst) {
            return Err(Error::disposed(LOADING_CONTROLLER_COMPONENT));
        }
        Ok(())
    }

    /// Wait until every in-flight load has unwound
    pub async fn wait_idle(&self) {
        self.tracker.wait_idle().await;
    }
}

#[async_trait]
impl ContainerLoader for LoadingController {
    async fn load_dyn(
        &self,
        key: AddressKey,
        cancel: Option<CancellationToken>,
    ) -> Result<Arc<dyn SheetContainer>> {
        self.load_key(key, cancel).await
    }

    fn is_loaded_key(&self, key: &AddressKey) -> Result<bool> {
        self.ensure_active()?;
        Ok(self.cache.contains(key))
    }

    fn evict_key(&self, key: &AddressKey) -> Result<bool> {
        self.ensure_active()?;
        match self.cache.remove(key) {
            Some(container) => {
                dispose_container(container.as_ref());
                info!(key = %key, "Container evicted");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn evict_all(&self) -> Result<usize> {
        self.ensure_active()?;
        let evicted = self.cache.clear();
        info!(evicted, "All containers evicted");
        Ok(evicted)
    }

    fn cancel_key(&self, key: &AddressKey) -> Result<bool> {
        self.ensure_active()?;
        Ok(self.tracker.cancel(key))
    }

    fn dispose(&self) {
        if self
            .disposed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Loading controller already disposed");
            return;
        }

        let evicted = self.cache.clear();
        // Cancelled loads release their resolver handles as they unwind
        let cancelled = self.tracker.cancel_all();
        self.gate.close();
        info!(evicted, cancelled, "Loading controller disposed");
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    fn cached_count(&self) -> usize {
        self.cache.len()
    }

    fn in_flight_count(&self) -> usize {
        self.tracker.len()
    }

    fn stats(&self) -> LoaderStats {
        LoaderStats {
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            loads: self.counters.loads.load(Ordering::Relaxed),
            failures: self.counters.failures.load(Ordering::Relaxed),
            cancellations: self.counters.cancellations.load(Ordering::Relaxed),
            cached: self.cache.len(),
            in_flight: self.tracker.len(),
        }
    }
}

impl fmt::Debug for LoadingController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingController")
            .field("resolver", &self.resolver.provider_name())
            .field("baker", &self.baker.baker_name())
            .field("registry", &self.registry)
            .field("cached", &self.cache.len())
            .field("in_flight", &self.tracker.len())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
