use thiserror::Error;

/// Failures are advisory here: the prefetcher swallows them and only metrics
/// see the details, so the taxonomy stays as small as what resolvers produce.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),
}
