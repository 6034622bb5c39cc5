//! Value Objects
//!
//! Immutable values passed between the controller and its collaborators.
//!
//! | Value object | Description |
//! |--------------|-------------|
//! | [`ContainerTypeId`] | Identity of a container type |
//! | [`AddressKey`] | Cache key: container type + logical address |
//! | [`RawHandle`] | Resolved asset bytes, released after baking |
//! | [`LoaderStats`] | Diagnostic counters of a loading controller |

pub mod address;
pub mod handle;
pub mod stats;

pub use address::{AddressKey, ContainerTypeId};
pub use handle::RawHandle;
pub use stats::LoaderStats;
