use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Prefetch metrics tracker
///
/// Failures are never surfaced to callers (prefetch is advisory), so they are
/// counted here instead of disappearing. Atomic counters plus a DashMap of
/// per-host failure counts.
#[derive(Clone, Default)]
pub struct PrefetchMetrics {
    /// Hosts handed to the worker pool
    submitted: Arc<AtomicU64>,

    /// Lookups that completed successfully
    resolved: Arc<AtomicU64>,

    /// Lookups that failed (unknown host, timeout, ...)
    failed: Arc<AtomicU64>,

    /// Hosts discarded by the drop-remainder branch (cap hit or pause)
    dropped: Arc<AtomicU64>,

    /// Single-host intakes refused by the one-page-at-a-time guard
    intake_rejected: Arc<AtomicU64>,

    /// Per-host failure counts
    failure_counts: Arc<DashMap<Arc<str>, u64>>,
}

impl PrefetchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_submitted(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, host: &Arc<str>) {
        self.failed.fetch_add(1, Ordering::Relaxed);
        self.failure_counts
            .entry(Arc::clone(host))
            .and_modify(|c| *c += 1)
            .or_insert(1);
    }

    pub fn record_dropped(&self, count: u64) {
        if count > 0 {
            self.dropped.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub fn record_intake_rejected(&self) {
        self.intake_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn failure_count_for(&self, host: &str) -> u64 {
        self.failure_counts.get(host).map(|c| *c).unwrap_or(0)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submitted: self.submitted.load(Ordering::Relaxed),
            resolved: self.resolved.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            intake_rejected: self.intake_rejected.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub submitted: u64,
    pub resolved: u64,
    pub failed: u64,
    pub dropped: u64,
    pub intake_rejected: u64,
}
