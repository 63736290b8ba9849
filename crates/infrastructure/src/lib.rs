//! hostwarm Infrastructure Layer
pub mod logging;
pub mod prefetch;
pub mod resolver;

pub use prefetch::{MetricsSnapshot, PrefetchHandle, PrefetchMetrics, Prefetcher};
pub use resolver::SystemResolver;
