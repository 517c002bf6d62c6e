//! Dataset Cache Module
//!
//! Holds the current dataset snapshot and reloads it lazily once it is
//! older than the configured TTL.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::catalog::{loader, CacheStats, Dataset, SourceReader, StatsCounter};
use crate::error::LoadError;

/// Default snapshot lifetime: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

// == Snapshot ==
/// A dataset paired with the instant it was loaded. Never mutated once published.
#[derive(Debug)]
pub struct Snapshot {
    pub dataset: Arc<Dataset>,
    pub loaded_at: Instant,
}

impl Snapshot {
    fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            loaded_at: Instant::now(),
        }
    }

    /// A snapshot is stale once strictly more than `ttl` has elapsed.
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.loaded_at.elapsed() > ttl
    }
}

// == Dataset Cache ==
/// Owns the live snapshot and the source it is reloaded from.
///
/// Readers clone the snapshot's `Arc<Dataset>` under a short read lock and run
/// their queries without holding any lock. Refresh attempts are serialized so
/// concurrent requests arriving after expiry trigger a single reload.
pub struct DatasetCache {
    source: Arc<dyn SourceReader>,
    ttl: Duration,
    snapshot: RwLock<Arc<Snapshot>>,
    refresh: Mutex<()>,
    stats: StatsCounter,
}

impl DatasetCache {
    // == Constructor ==
    /// Performs the initial load and builds the cache.
    ///
    /// A failure here means there is no data to serve; callers should refuse
    /// to start.
    pub fn load(source: Arc<dyn SourceReader>, ttl: Duration) -> Result<Self, LoadError> {
        let dataset = read_dataset(source.as_ref())?;
        info!(
            "Loaded {} records from {}",
            dataset.len(),
            source.describe()
        );

        let stats = StatsCounter::new();
        stats.record_reload(dataset.dropped_records);

        Ok(Self {
            source,
            ttl,
            snapshot: RwLock::new(Arc::new(Snapshot::new(dataset))),
            refresh: Mutex::new(()),
            stats,
        })
    }

    // == Get Dataset ==
    /// Returns the current dataset, reloading it first if the snapshot is stale.
    ///
    /// The source is read and parsed on the blocking pool. A failed reload is
    /// logged and the previous dataset is returned.
    pub async fn get_dataset(&self) -> Arc<Dataset> {
        let current = self.current().await;
        if !current.is_stale(self.ttl) {
            self.stats.record_hit();
            debug!("Serving cached dataset");
            return current.dataset.clone();
        }

        let _guard = self.refresh.lock().await;

        // Another request may have reloaded while we waited for the guard.
        let latest = self.current().await;
        if !Arc::ptr_eq(&latest, &current) || !latest.is_stale(self.ttl) {
            self.stats.record_hit();
            return latest.dataset.clone();
        }

        let source = self.source.clone();
        let loaded = tokio::task::spawn_blocking(move || read_dataset(source.as_ref()))
            .await
            .unwrap_or_else(|e| Err(LoadError::Io(io::Error::new(io::ErrorKind::Other, e))));

        match loaded {
            Ok(dataset) => {
                info!(
                    "Reloaded {} records from {}",
                    dataset.len(),
                    self.source.describe()
                );
                self.stats.record_reload(dataset.dropped_records);
                let fresh = Arc::new(Snapshot::new(dataset));
                let served = fresh.dataset.clone();
                *self.snapshot.write().await = fresh;
                served
            }
            Err(e) => {
                warn!("Failed to reload dataset, serving previous snapshot: {}", e);
                self.stats.record_failed_reload();
                current.dataset.clone()
            }
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Configured snapshot lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn current(&self) -> Arc<Snapshot> {
        self.snapshot.read().await.clone()
    }
}

fn read_dataset(source: &dyn SourceReader) -> Result<Dataset, LoadError> {
    let bytes = source.read()?;
    loader::load(&bytes)
}
