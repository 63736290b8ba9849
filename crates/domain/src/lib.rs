//! hostwarm Domain Layer
pub mod config;
pub mod errors;
pub mod host;
pub mod validators;

pub use config::{Config, ConfigError, LoggingConfig, PrefetchConfig};
pub use errors::DomainError;
pub use host::{HostPriority, PrefetchRequest};
