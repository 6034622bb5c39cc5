//! # Bakery
//!
//! A single-flight, cancellable loading cache for baked data containers.
//!
//! Each distinct container (type + address) is resolved and baked at most
//! once, even under concurrent requests; loads can be cancelled cooperatively
//! and a context can be torn down deterministically.
//!
//! ## Example
//!
//! ```ignore
//! use bakery::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct GameData { items: Vec<serde_json::Value> }
//!
//! impl SheetContainer for GameData {
//!     fn bake(&mut self, document: SheetDocument) -> Result<()> {
//!         self.items = document["items"].as_array().cloned().unwrap_or_default();
//!         Ok(())
//!     }
//! }
//!
//! bakery::register_container!(GameData, "Items, quests and drop tables");
//!
//! let config = ConfigLoader::new().load()?;
//! let context = init_bakery(&config)?;
//! let data = context.loader().load::<GameData>("Config", None).await?;
//! context.shutdown(config.loader.shutdown_timeout()).await;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - keys, handles, errors and collaborator ports
//! - `application` - provider registries and the `ContainerLoader` port
//! - `infrastructure` - cache, tracker, gate, controller, lifecycle, config, logging
//! - `providers` - filesystem / memory / null resolvers, json / toml bakers

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use bakery_domain::*;
}

/// Application layer - registries and loader port
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use bakery_application::*;
}

/// Infrastructure layer - loading core, lifecycle, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use bakery_infrastructure::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use bakery_providers::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{
    AddressKey, CancellationToken, ContainerTypeId, Disposable, Error, LoaderStats, Result,
    SheetContainer, SheetDocument,
};

// Re-export the lifecycle entry points at the crate root
pub use infrastructure::{BakeryContext, LoadingController, init_bakery, init_bakery_with};

// Compile-time container registration
pub use bakery_application::register_container;

/// Everything needed to define containers and load them
pub mod prelude {
    pub use bakery_application::ports::registry::ContainerRegistry;
    pub use bakery_application::ports::{ContainerLoader, ContainerLoaderExt};
    pub use bakery_domain::{
        AddressKey, CancellationToken, Disposable, Error, Result, SheetContainer, SheetDocument,
    };
    pub use bakery_infrastructure::config::{AppConfig, ConfigLoader};
    pub use bakery_infrastructure::logging::init_logging;
    pub use bakery_infrastructure::{BakeryContext, LoadingController, init_bakery, init_bakery_with};
}
