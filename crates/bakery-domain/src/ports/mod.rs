//! Domain Port Interfaces
//!
//! Contracts implemented outside the core: the containers themselves and the
//! collaborators that fetch and bake them.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`SheetContainer`] | A typed aggregate of baked rows, the unit of caching |
//! | [`Disposable`] | Optional teardown hook of a container |
//! | [`AssetResolver`] | Turns a logical address into a raw handle |
//! | [`DataBaker`] | Populates a container from a raw handle |

pub mod container;
pub mod providers;

pub use container::{Disposable, SheetContainer, SheetDocument};
pub use providers::{AssetResolver, DataBaker};
