//! Single-flight gate
//!
//! A binary semaphore shared by all keys of one controller. At most one real
//! load runs at a time; waiting is cancellable and closing the gate fails every
//! pending and later acquisition.

use bakery_domain::error::{Error, Result};
use tokio::sync::{Semaphore, SemaphorePermit};
use tokio_util::sync::CancellationToken;
use tracing::trace;

const GATE_COMPONENT: &str = "SingleFlightGate";

/// Mutual exclusion of capacity one across all keys
#[derive(Debug)]
pub struct SingleFlightGate {
    semaphore: Semaphore,
}

impl Default for SingleFlightGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleFlightGate {
    /// Create an open gate
    pub fn new() -> Self {
        Self {
            semaphore: Semaphore::new(1),
        }
    }

    /// Wait for the gate
    ///
    /// # Errors
    ///
    /// `Cancelled` if `cancel` fires first (nothing is acquired), `Disposed`
    /// once the gate is closed.
    pub async fn acquire(&self, cancel: &CancellationToken) -> Result<GatePermit<'_>> {
        if cancel.is_cancelled() {
            return Err(Error::cancelled("gate acquire"));
        }
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(Error::cancelled("gate acquire")),
            permit = self.semaphore.acquire() => {
                let permit = permit.map_err(|_| Error::disposed(GATE_COMPONENT))?;
                trace!("Single-flight gate acquired");
                Ok(GatePermit { _permit: permit })
            }
        }
    }

    /// Close the gate; pending and later acquisitions fail with `Disposed`
    pub fn close(&self) {
        self.semaphore.close();
    }

    /// True once the gate is closed
    pub fn is_closed(&self) -> bool {
        self.semaphore.is_closed()
    }

    /// True while a load holds the gate
    pub fn is_held(&self) -> bool {
        self.semaphore.available_permits() == 0
    }
}

/// Scoped gate ownership; released on drop
#[derive(Debug)]
pub struct GatePermit<'a> {
    _permit: SemaphorePermit<'a>,
}
