//! Pairwise value cache scoped to one trained model.
//!
//! Uses `moka::sync::Cache` keyed by the ordered `(x, y)` id pair. A cache is
//! created with its model and dropped with it, so a rebuilt model never sees
//! values computed in the old model's space. Tracks hits/misses.

use std::sync::atomic::{AtomicU64, Ordering};

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use tracing::trace;

use poolwise_core::models::ExampleId;

/// Hit/miss counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

impl CacheStats {
    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Memoized scalar per ordered example pair.
///
/// Bounded by `max_pairs`: once full, moka evicts entries and a later lookup
/// of an evicted pair recomputes it.
pub struct PairCache {
    cache: Cache<(ExampleId, ExampleId), f64>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PairCache {
    /// Create a cache holding at most `max_pairs` entries.
    pub fn new(max_pairs: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_pairs).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cached value for `(x, y)`, if any. Does not touch the counters.
    pub fn peek(&self, x: ExampleId, y: ExampleId) -> Option<f64> {
        self.cache.get(&(x, y))
    }

    /// Return the cached value for `(x, y)`, computing and storing it on a miss.
    pub fn get_or_compute(&self, x: ExampleId, y: ExampleId, compute: impl FnOnce() -> f64) -> f64 {
        if let Some(v) = self.cache.get(&(x, y)) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return v;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let v = compute();
        trace!(x = %x, y = %y, value = v, "pair cache miss");
        self.cache.insert((x, y), v);
        v
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl std::fmt::Debug for PairCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairCache").field("stats", &self.stats()).finish()
    }
}
