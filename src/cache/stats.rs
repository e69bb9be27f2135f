//! Cache Statistics Module
//!
//! Tracks hit/miss counters for the read-through cache.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Hit/miss counters shared by all callers of a cache.
///
/// The read path holds only the shared lock, so counters are atomics rather
/// than fields behind the write lock. Relaxed ordering is enough: the
/// counters are advisory and never synchronize other state.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Plain-data view of [`CacheStats`] at one instant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsSnapshot {
    /// Number of gets served from the mapping
    pub hits: u64,
    /// Number of gets that fell through to the backing store
    pub misses: u64,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a snapshot of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl StatsSnapshot {
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no gets have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
