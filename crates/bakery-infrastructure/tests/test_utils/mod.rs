//! Test utilities for bakery-infrastructure integration tests
//!
//! Real providers (the memory resolver and the JSON baker) wrapped with
//! counters, plus a handful of sample containers.


pub use containers::*;
pub use providers::*;
