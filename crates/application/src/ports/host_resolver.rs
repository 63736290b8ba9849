use async_trait::async_trait;
use hostwarm_domain::DomainError;

/// Port for warming a hostname in the platform resolver cache.
///
/// Implementations perform one lookup whose only valuable effect is the side
/// effect on the OS resolver cache. The prefetcher discards the address list;
/// the count is returned so tests and metrics can observe it.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolve `host` once. Ok(number of addresses) on success.
    async fn resolve(&self, host: &str) -> Result<usize, DomainError>;
}
