use async_trait::async_trait;
use hostwarm_application::ports::HostResolver;
use hostwarm_domain::DomainError;
use tracing::trace;

/// OS-backed resolver.
///
/// Resolves through the platform resolver (`getaddrinfo` via tokio's blocking
/// pool), so every successful lookup lands in the OS resolver cache. The
/// address list itself is never used by the prefetcher.
#[derive(Debug, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<usize, DomainError> {
        // Port 0: only the hostname matters for cache warming.
        let addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| DomainError::ResolutionFailed(e.to_string()))?;

        let count = addrs.count();
        trace!(host = %host, addresses = count, "Warmed OS resolver cache");
        Ok(count)
    }
}
