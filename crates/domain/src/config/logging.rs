use serde::{Deserialize, Serialize};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Diagnostics verbosity.
///
/// Prefetch work is fire-and-forget, so logs are the main window into it:
/// "debug" surfaces drain-cycle decisions (pause, cap, dropped remainders),
/// "trace" adds per-host lookup outcomes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// The configured level, or "info" when the string is not a known level.
    pub fn effective_level(&self) -> &str {
        if LEVELS.contains(&self.level.as_str()) {
            self.level.as_str()
        } else {
            "info"
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
