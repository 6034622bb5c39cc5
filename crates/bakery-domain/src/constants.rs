//! Domain layer constants
//!
//! Limits that are part of the domain rules. Infrastructure defaults live in
//! `bakery_infrastructure::constants`.

/// Maximum accepted length of a logical container address
pub const ADDRESS_MAX_LENGTH: usize = 1024;

/// Separator used when rendering an `AddressKey` for logs
pub const ADDRESS_KEY_SEPARATOR: &str = ":";
