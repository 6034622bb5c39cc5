//! Configuration types module

pub mod app;
pub mod loader;
pub mod logging;

pub use app::AppConfig;
pub use loader::{BakerConfig, LoaderConfig, ResolverConfig};
pub use logging::LoggingConfig;
