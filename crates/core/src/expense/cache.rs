//! Expense report caching using Moka.
//!
//! Reports are recomputed whenever any input collection changes. The cache
//! keys each report by a fingerprint of the whole dataset, so unchanged
//! input is served without recomputation.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use super::engine::ExpenseEngine;
use super::types::{ExpenseDataset, ExpenseReport};

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// A report served through the cache.
#[derive(Debug, Clone)]
pub struct CachedReport {
    /// Dataset fingerprint the report was computed from.
    pub fingerprint: String,
    /// Whether the report came from the cache.
    pub cached: bool,
    /// The report.
    pub report: Arc<ExpenseReport>,
}

/// Cache for expense reports.
///
/// Thread-safe; clones share the same storage.
#[derive(Clone)]
pub struct ReportCache {
    cache: Cache<String, Arc<ExpenseReport>>,
}

impl ReportCache {
    /// Creates a new report cache with default settings.
    ///
    /// Default: 64 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new report cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Computes a report, returning the cached one if the dataset is unchanged.
    #[must_use]
    pub fn compute_cached(&self, data: &ExpenseDataset<'_>) -> CachedReport {
        let fingerprint = data.fingerprint();

        if let Some(report) = self.cache.get(&fingerprint) {
            return CachedReport {
                fingerprint,
                cached: true,
                report,
            };
        }

        let report = Arc::new(ExpenseEngine::compute(data));
        self.cache.insert(fingerprint.clone(), Arc::clone(&report));

        CachedReport {
            fingerprint,
            cached: false,
            report,
        }
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Invalidates the entry for a specific dataset.
    pub fn invalidate(&self, data: &ExpenseDataset<'_>) {
        self.cache.invalidate(&data.fingerprint());
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReportCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportCache")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}
