//! Cache Statistics Module
//!
//! Tracks how the dataset cache answers requests: fresh hits, reloads and
//! failed reloads that fell back to the previous snapshot.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time copy of the cache counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Requests served from a fresh snapshot
    pub hits: u64,
    /// Successful reloads, including the initial load
    pub reloads: u64,
    /// Reloads that failed and reused the previous snapshot
    pub failed_reloads: u64,
    /// Records dropped by validation in the current snapshot
    pub dropped_records: usize,
}

impl CacheStats {
    // == Failure Rate ==
    /// Share of reload attempts that failed, or 0.0 if none were made.
    pub fn failure_rate(&self) -> f64 {
        let attempts = self.reloads + self.failed_reloads;
        if attempts == 0 {
            0.0
        } else {
            self.failed_reloads as f64 / attempts as f64
        }
    }
}

// == Stats Counter ==
/// Lock-free counters updated concurrently by request handlers.
#[derive(Debug, Default)]
pub struct StatsCounter {
    hits: AtomicU64,
    reloads: AtomicU64,
    failed_reloads: AtomicU64,
    dropped_records: AtomicUsize,
}

impl StatsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reload(&self, dropped_records: usize) {
        self.reloads.fetch_add(1, Ordering::Relaxed);
        self.dropped_records.store(dropped_records, Ordering::Relaxed);
    }

    pub fn record_failed_reload(&self) {
        self.failed_reloads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            reloads: self.reloads.load(Ordering::Relaxed),
            failed_reloads: self.failed_reloads.load(Ordering::Relaxed),
            dropped_records: self.dropped_records.load(Ordering::Relaxed),
        }
    }
}
