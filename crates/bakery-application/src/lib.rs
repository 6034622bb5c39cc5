//! Application Layer - Bakery
//!
//! Wires the domain ports into something a composition root can assemble:
//! compile-time provider registries and the loader port consumed by callers.
//!
//! ## Ports (Interfaces)
//!
//! - `ports::registry::*`: linkme registries for resolvers, bakers and container types
//! - `ports::loader::*`: the `ContainerLoader` port and its typed extension
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `bakery-domain`: keys, errors and collaborator ports
//! - Pure Rust libraries for async, registration and logging

pub mod ports;

pub use ports::*;

/// Re-exported so `register_container!` works without a direct linkme dependency
pub use linkme;
