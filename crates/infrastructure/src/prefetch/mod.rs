//! DNS prefetch service.
//!
//! Page-load coordinators hand hostnames to a [`PrefetchHandle`]; a single
//! dispatch loop drains them into a bounded worker pool that warms the OS
//! resolver cache. Everything is best effort: no operation here ever fails,
//! and results are discarded.

mod dispatcher;
pub mod metrics;
pub mod pending;

pub use metrics::{MetricsSnapshot, PrefetchMetrics};

use hostwarm_application::ports::HostResolver;
use hostwarm_domain::validators::normalize_hostname;
use hostwarm_domain::{HostPriority, PrefetchConfig, PrefetchRequest};
use pending::PendingSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{watch, Notify, Semaphore};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// State shared between handles, the dispatch loop, and worker tasks.
pub(crate) struct Shared {
    pub(crate) config: PrefetchConfig,
    pub(crate) resolver: Arc<dyn HostResolver>,
    pub(crate) pending: Mutex<PendingSet>,
    pub(crate) running: AtomicBool,
    pub(crate) wake: Notify,
    pub(crate) shutdown: CancellationToken,
    pub(crate) idle_tx: watch::Sender<bool>,
    pub(crate) metrics: PrefetchMetrics,
    pub(crate) workers: Arc<Semaphore>,
}

/// DNS prefetch service constructor.
///
/// There is no process-wide instance: the application root calls
/// [`Prefetcher::spawn`] once and hands out clones of the returned handle to
/// every page-load coordinator. The service shuts down when the last handle
/// is dropped (or on an explicit [`PrefetchHandle::shutdown`]).
pub struct Prefetcher;

impl Prefetcher {
    pub fn spawn(config: PrefetchConfig, resolver: Arc<dyn HostResolver>) -> PrefetchHandle {
        let (idle_tx, idle_rx) = watch::channel(true);
        let workers = Arc::new(Semaphore::new(config.worker_slots));

        let shared = Arc::new(Shared {
            resolver,
            pending: Mutex::new(PendingSet::new()),
            running: AtomicBool::new(true),
            wake: Notify::new(),
            shutdown: CancellationToken::new(),
            idle_tx,
            metrics: PrefetchMetrics::new(),
            workers,
            config,
        });

        tokio::spawn(dispatcher::run(Arc::clone(&shared)));

        info!(
            worker_slots = shared.config.worker_slots,
            max_queries_per_page = shared.config.max_queries_per_page,
            "DNS prefetcher started"
        );

        PrefetchHandle {
            owner: Arc::new(Owner { shared, idle_rx }),
        }
    }
}

struct Owner {
    shared: Arc<Shared>,
    idle_rx: watch::Receiver<bool>,
}

impl Drop for Owner {
    fn drop(&mut self) {
        // Last handle gone: stop the dispatch loop. In-flight lookups run to
        // completion on their own.
        self.shared.shutdown.cancel();
    }
}

/// Cloneable handle to the prefetch service. One clone per owner (tab, frame);
/// the handle count plays the role of the owner ref-count.
#[derive(Clone)]
pub struct PrefetchHandle {
    owner: Arc<Owner>,
}

impl PrefetchHandle {
    fn shared(&self) -> &Arc<Shared> {
        &self.owner.shared
    }

    /// Queue a single hostname, subject to the one-page-at-a-time intake
    /// guard: while anything is already pending, the call is a no-op. Invalid
    /// hostnames are silently ignored.
    pub fn prefetch_host(&self, host: &str, priority: HostPriority) {
        let shared = self.shared();
        if shared.shutdown.is_cancelled() {
            return;
        }
        let Some(host) = normalize_hostname(host) else {
            return;
        };

        let inserted = {
            let mut pending = shared.pending.lock().unwrap();
            let inserted = pending.insert_guarded(Arc::from(host), priority);
            if inserted {
                let _ = shared.idle_tx.send(false);
            }
            inserted
        };

        if inserted {
            shared.wake.notify_one();
        } else {
            shared.metrics.record_intake_rejected();
        }
    }

    /// Merge a whole page's worth of hostnames, bypassing the intake guard.
    /// Map semantics: the priority supplied last wins per hostname.
    pub fn prefetch_page<I, R>(&self, hosts: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<PrefetchRequest>,
    {
        let shared = self.shared();
        if shared.shutdown.is_cancelled() {
            return;
        }

        let normalized: Vec<(Arc<str>, HostPriority)> = hosts
            .into_iter()
            .map(Into::into)
            .filter_map(|req| {
                normalize_hostname(&req.host).map(|h| (Arc::from(h), req.priority))
            })
            .collect();
        if normalized.is_empty() {
            return;
        }

        {
            let mut pending = shared.pending.lock().unwrap();
            pending.merge(normalized);
            let _ = shared.idle_tx.send(false);
        }
        shared.wake.notify_one();
    }

    /// Stop draining. Queued hosts stay queued (unless a drain cycle was
    /// interrupted mid-burst, which clears them); intake stays open.
    pub fn pause(&self) {
        self.shared().running.store(false, Ordering::Release);
        debug!("Prefetcher paused");
    }

    /// Resume draining.
    pub fn resume(&self) {
        let shared = self.shared();
        shared.running.store(true, Ordering::Release);
        shared.wake.notify_one();
        debug!("Prefetcher resumed");
    }

    /// Stop the service for good. Idempotent; equivalent to dropping every
    /// handle, but deterministic.
    pub fn shutdown(&self) {
        self.shared().shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shared().shutdown.is_cancelled()
    }

    /// Per-page dispatch cap; embedders size their hostname extraction to it.
    pub fn max_queries_per_page(&self) -> usize {
        self.shared().config.max_queries_per_page
    }

    pub fn metrics(&self) -> PrefetchMetrics {
        self.shared().metrics.clone()
    }

    /// Wait until the pending set is drained (or the service is shut down).
    /// In-flight worker lookups may still be running when this returns.
    pub async fn wait_until_idle(&self) {
        let mut idle_rx = self.owner.idle_rx.clone();
        let _ = idle_rx.wait_for(|idle| *idle).await;
    }
}
