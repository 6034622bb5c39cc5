//! Loader statistics

use serde::{Deserialize, Serialize};

/// Snapshot of a loading controller's counters
///
/// # Example
///
/// ```ignore
/// let stats = controller.stats();
/// println!("Hit rate: {:.1}%", stats.hit_rate() * 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderStats {
    /// Loads answered from the cache (including the post-gate re-check)
    pub hits: u64,
    /// Loads that found nothing cached after acquiring the gate
    pub misses: u64,
    /// Real loads that completed and were cached
    pub loads: u64,
    /// Real loads that failed
    pub failures: u64,
    /// Loads that ended cancelled
    pub cancellations: u64,
    /// Containers currently cached
    pub cached: usize,
    /// Loads currently in flight
    pub in_flight: usize,
}

impl LoaderStats {
    /// Fraction of requests answered from the cache (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}
