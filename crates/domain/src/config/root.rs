use super::{ConfigError, LoggingConfig, PrefetchConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub prefetch: PrefetchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the dispatch loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefetch.worker_slots == 0 {
            return Err(ConfigError::Invalid(
                "prefetch.worker_slots must be at least 1".to_string(),
            ));
        }
        if self.prefetch.max_queries_per_page == 0 {
            return Err(ConfigError::Invalid(
                "prefetch.max_queries_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
