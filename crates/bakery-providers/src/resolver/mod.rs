//! Asset Resolver Implementations
//!
//! ## Available Resolvers
//!
//! | Resolver | Type | Description |
//! |----------|------|-------------|
//! | [`FilesystemAssetResolver`] | Local | Files below a root directory |
//! | [`MemoryAssetResolver`] | Embedded | Registered byte buffers, optional latency |
//! | [`NullAssetResolver`] | Testing | Never finds anything |

pub mod filesystem;
pub mod memory;
pub mod null;

pub use filesystem::FilesystemAssetResolver;
pub use memory::MemoryAssetResolver;
pub use null::NullAssetResolver;
