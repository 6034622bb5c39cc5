//! Runtime lifecycle
//!
//! Explicit creation and teardown of a Bakery context.

pub mod lifecycle;

pub use lifecycle::{BakeryContext, init_bakery, init_bakery_with};
