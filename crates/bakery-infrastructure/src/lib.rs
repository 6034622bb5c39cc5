//! # Infrastructure Layer
//!
//! The loading core and its cross-cutting concerns.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | `ContainerCache`, the durable store of baked containers |
//! | [`loading`] | `LoadTracker`, `SingleFlightGate` and the `LoadingController` |
//! | [`infrastructure`] | `BakeryContext` lifecycle (`init_bakery` / `shutdown`) |
//! | [`config`] | Figment-based configuration loading |
//! | [`logging`] | tracing-subscriber setup |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | Infrastructure defaults |

// Link the provider registrations so configuration can select them by name
extern crate bakery_providers;

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod infrastructure;
pub mod loading;
pub mod logging;

pub use cache::{CachedContainer, ContainerCache};
pub use config::{AppConfig, LoaderConfig, LoggingConfig};
pub use infrastructure::lifecycle::{BakeryContext, init_bakery, init_bakery_with};
pub use loading::{GatePermit, InFlightLoad, LoadTracker, LoadingController, SingleFlightGate};
