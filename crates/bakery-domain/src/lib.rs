//! # Domain Layer
//!
//! Core types shared by every Bakery crate: the cache key, the raw asset
//! handle, the error taxonomy and the ports implemented by external
//! collaborators.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error` enum and `Result` alias |
//! | [`cancellation`] | Racing futures against a `CancellationToken` |
//! | [`constants`] | Domain-wide limits |
//! | [`value_objects`] | `ContainerTypeId`, `AddressKey`, `RawHandle`, `LoaderStats` |
//! | [`ports`] | `SheetContainer`, `AssetResolver`, `DataBaker` traits |
//!
//! ## Dependencies
//!
//! Pure libraries only: serde, thiserror, async-trait, downcast-rs and the
//! cancellation token from tokio-util.

pub mod cancellation;
pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{AssetResolver, DataBaker, Disposable, SheetContainer, SheetDocument};
pub use value_objects::{AddressKey, ContainerTypeId, LoaderStats, RawHandle};

/// Cancellation token used across the whole load pipeline
pub use tokio_util::sync::CancellationToken;
