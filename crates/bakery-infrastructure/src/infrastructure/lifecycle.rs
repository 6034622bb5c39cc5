//! Bakery context lifecycle
//!
//! A [`BakeryContext`] is the session-scoped owner of one
//! [`LoadingController`]. It is created explicitly by [`init_bakery`] and torn
//! down by [`BakeryContext::shutdown`]; there is no global instance.
//!
//! ## Usage
//!
//! ```ignore
//! use bakery_infrastructure::config::ConfigLoader;
//! use bakery_infrastructure::infrastructure::lifecycle::init_bakery;
//!
//! let config = ConfigLoader::new().load()?;
//! let context = init_bakery(&config)?;
//!
//! let items = context.loader().load::<Items>("Sheets/Items", None).await?;
//!
//! // Dispose and wait (bounded) for in-flight loads to unwind
//! let drained = context.shutdown(config.loader.shutdown_timeout()).await;
//! ```

use crate::config::AppConfig;
use crate::loading::LoadingController;
use bakery_application::ports::loader::ContainerLoader;
use bakery_application::ports::registry::ContainerRegistry;
use bakery_domain::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Create a context with every linked container type registered
///
/// # Errors
///
/// `Configuration` if the configured resolver or baker cannot be created.
pub fn init_bakery(config: &AppConfig) -> Result<BakeryContext> {
    init_bakery_with(config, ContainerRegistry::from_linked())
}

/// Create a context with an explicit container registry
pub fn init_bakery_with(config: &AppConfig, registry: ContainerRegistry) -> Result<BakeryContext> {
    let controller = LoadingController::from_config(&config.loader, registry)?;
    info!(
        resolver = %config.loader.resolver.provider,
        baker = %config.loader.baker.provider,
        "Bakery context initialized"
    );
    Ok(BakeryContext::new(controller))
}

/// Session-scoped owner of a loading controller
#[derive(Debug, Clone)]
pub struct BakeryContext {
    loader: Arc<LoadingController>,
}

impl BakeryContext {
    /// Wrap an existing controller
    pub fn new(controller: LoadingController) -> Self {
        Self {
            loader: Arc::new(controller),
        }
    }

    /// Wrap a controller that is already shared
    pub fn from_shared(loader: Arc<LoadingController>) -> Self {
        Self { loader }
    }

    /// The context's loader
    pub fn loader(&self) -> &Arc<LoadingController> {
        &self.loader
    }

    /// The loader as a trait object
    pub fn container_loader(&self) -> Arc<dyn ContainerLoader> {
        Arc::clone(&self.loader) as Arc<dyn ContainerLoader>
    }

    /// True until the context has been shut down
    pub fn is_initialized(&self) -> bool {
        !self.loader.is_disposed()
    }

    /// Dispose the loader and wait up to `timeout` for in-flight loads to unwind
    ///
    /// Idempotent. Returns false if loads were still running at the deadline.
    pub async fn shutdown(&self, timeout: Duration) -> bool {
        self.loader.dispose();

        let drained = tokio::time::timeout(timeout, self.loader.wait_idle())
            .await
            .is_ok();
        if drained {
            info!("Bakery context shut down");
        } else {
            warn!(
                in_flight = self.loader.in_flight_count(),
                timeout_ms = timeout.as_millis(),
                "Shutdown timed out with loads still in flight"
            );
        }
        drained
    }
}
