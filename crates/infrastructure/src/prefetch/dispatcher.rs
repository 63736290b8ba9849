use super::Shared;
use hostwarm_domain::HostPriority;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{debug, trace};

/// The dispatch loop: one task that drains the pending set into the worker
/// pool, strictly alternating between the two priority classes.
///
/// A "burst" is everything dispatched between two idle periods; at most
/// `max_queries_per_page` hosts are submitted per burst. Hitting the cap, or
/// being paused mid-drain, discards whatever is still pending instead of
/// carrying it into the next burst.
pub(crate) async fn run(shared: Arc<Shared>) {
    debug!("Prefetch dispatch loop started");

    let mut class = HostPriority::High;
    let mut dispatched_in_burst = 0usize;

    loop {
        if shared.shutdown.is_cancelled() {
            break;
        }

        // Idle is published under the pending lock so the watch value always
        // agrees with the set contents (intake publishes non-idle the same way).
        let pending_empty = {
            let pending = shared.pending.lock().unwrap();
            let empty = pending.is_empty();
            if empty {
                let _ = shared.idle_tx.send(true);
            }
            empty
        };
        let running = shared.running.load(Ordering::Acquire);

        if pending_empty {
            // Per-burst state resets here.
            class = HostPriority::High;
            dispatched_in_burst = 0;

            tokio::select! {
                _ = shared.shutdown.cancelled() => break,
                _ = shared.wake.notified() => {}
            }
            continue;
        }

        if !running {
            if dispatched_in_burst > 0 {
                // Pause landed mid-burst: the remainder is dropped, same as
                // the cap branch, never carried into the next burst.
                let dropped = shared.pending.lock().unwrap().clear();
                shared.metrics.record_dropped(dropped as u64);
                debug!(dropped = dropped, "Pause mid-burst cleared pending remainder");
                continue;
            }
            // Paused before the burst started: hold the queue and wait for
            // resume (or shutdown).
            tokio::select! {
                _ = shared.shutdown.cancelled() => break,
                _ = shared.wake.notified() => {}
            }
            continue;
        }

        let remaining = shared
            .config
            .max_queries_per_page
            .saturating_sub(dispatched_in_burst);
        let batch = shared.pending.lock().unwrap().take_class(class, remaining);

        let mut paused_mid_drain = false;
        for host in batch {
            if !shared.running.load(Ordering::Acquire) {
                // Pause observed mid-drain: the rest of this batch joins the
                // drop-remainder below.
                shared.metrics.record_dropped(1);
                paused_mid_drain = true;
                continue;
            }
            submit(&shared, host);
            dispatched_in_burst += 1;
        }

        let cap_reached = dispatched_in_burst >= shared.config.max_queries_per_page;
        if paused_mid_drain || cap_reached {
            let dropped = shared.pending.lock().unwrap().clear();
            shared.metrics.record_dropped(dropped as u64);
            if dropped > 0 {
                debug!(
                    dropped = dropped,
                    cap_reached = cap_reached,
                    "Cleared pending remainder"
                );
            }
        } else {
            // Next outer pass drains the other class.
            class = other_class(class);
        }

        // The drain itself never awaits; re-scheduling here gives pause and
        // shutdown a fixed observation point between passes.
        tokio::task::yield_now().await;
    }

    let _ = shared.idle_tx.send(true);
    debug!("Prefetch dispatch loop exiting");
}

fn other_class(class: HostPriority) -> HostPriority {
    match class {
        HostPriority::High => HostPriority::Normal,
        HostPriority::Normal => HostPriority::High,
    }
}

/// Fire-and-forget submission: the worker task queues on the semaphore that
/// bounds pool concurrency, resolves once, and discards the result.
fn submit(shared: &Arc<Shared>, host: Arc<str>) {
    shared.metrics.record_submitted();

    let shared = Arc::clone(shared);
    tokio::spawn(async move {
        let permit = match Arc::clone(&shared.workers).acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => return,
        };

        match shared.resolver.resolve(&host).await {
            Ok(addresses) => {
                trace!(host = %host, addresses = addresses, "Prefetch resolved");
                shared.metrics.record_resolved();
            }
            Err(e) => {
                // Best effort: a failed prefetch only means a cold cache later.
                trace!(host = %host, error = %e, "Prefetch failed");
                shared.metrics.record_failure(&host);
            }
        }

        drop(permit);
    });
}
