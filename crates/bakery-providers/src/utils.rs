//! Shared utilities for provider implementations

use bakery_domain::value_objects::RawHandle;
use dashmap::DashMap;
use tracing::{trace, warn};

/// Ledger of handles a resolver has handed out but not yet seen released
#[derive(Debug, Default)]
pub struct HandleLedger {
    outstanding: DashMap<u64, String>,
}

impl HandleLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a handle as handed out
    pub fn issue(&self, handle: &RawHandle) {
        self.outstanding
            .insert(handle.id(), handle.address().to_string());
    }

    /// Record a handle as released; false for unknown or double releases
    pub fn release(&self, handle: &RawHandle) -> bool {
        match self.outstanding.remove(&handle.id()) {
            Some((id, address)) => {
                trace!(handle = id, address = %address, "Asset handle released");
                true
            }
            None => {
                warn!(
                    handle = handle.id(),
                    address = handle.address(),
                    "Release of an unknown asset handle"
                );
                false
            }
        }
    }

    /// Number of handles not yet released
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }
}
