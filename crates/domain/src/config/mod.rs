//! Configuration module for hostwarm
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and TOML loading
//! - `prefetch`: Prefetch worker pool and intake settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod prefetch;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use prefetch::PrefetchConfig;
pub use root::Config;
