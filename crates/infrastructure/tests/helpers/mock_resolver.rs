#![allow(dead_code)]

use async_trait::async_trait;
use hostwarm_application::ports::HostResolver;
use hostwarm_domain::DomainError;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock HostResolver
// ============================================================================

#[derive(Default)]
pub struct MockResolver {
    calls: Mutex<Vec<String>>,
    fail_hosts: HashSet<String>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_failures(hosts: Vec<&str>) -> Arc<Self> {
        Arc::new(Self {
            fail_hosts: hosts.into_iter().map(String::from).collect(),
            ..Self::default()
        })
    }

    pub fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay: Some(delay),
            ..Self::default()
        })
    }

    /// Hostnames in the order the workers picked them up.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Highest number of lookups observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for MockResolver {
    async fn resolve(&self, host: &str) -> Result<usize, DomainError> {
        self.calls.lock().unwrap().push(host.to_string());

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_hosts.contains(host) {
            Err(DomainError::ResolutionFailed(format!(
                "unknown host: {host}"
            )))
        } else {
            Ok(2)
        }
    }
}
