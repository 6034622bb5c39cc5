//! Container Port
//!
//! A container owns its schema: the baker only turns raw bytes into a
//! [`SheetDocument`] and the container binds that document to typed rows.

use crate::error::Result;
use downcast_rs::{DowncastSync, impl_downcast};
use std::fmt::Debug;

/// Parsed, format-independent document handed to a container while baking
pub type SheetDocument = serde_json::Value;

/// Teardown hook exposed by containers that hold releasable resources
pub trait Disposable: Send + Sync {
    /// Release resources held by the container
    fn dispose(&self);
}

/// A typed aggregate of baked rows
///
/// Instances are created empty by a registered constructor, populated once
/// by [`SheetContainer::bake`] and then shared read-only through `Arc`.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Default)]
/// struct GameData {
///     items: Vec<Item>,
/// }
///
/// impl SheetContainer for GameData {
///     fn bake(&mut self, document: SheetDocument) -> Result<()> {
///         self.items = serde_json::from_value(document["items"].clone())?;
///         Ok(())
///     }
/// }
/// ```
pub trait SheetContainer: DowncastSync + Debug {
    /// Populate the container from a parsed document
    fn bake(&mut self, document: SheetDocument) -> Result<()>;

    /// Check cross-row invariants after baking
    fn verify(&self) -> Result<()> {
        Ok(())
    }

    /// Disposal contract, if the container has one
    fn as_disposable(&self) -> Option<&dyn Disposable> {
        None
    }
}

impl_downcast!(sync SheetContainer);
