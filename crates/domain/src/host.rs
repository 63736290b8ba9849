use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Priority class of a prefetch candidate.
///
/// Embedders tag hostnames extracted from page content with `"1"` for hosts on
/// the critical navigation path and `"0"` for everything else. Anything that is
/// not the high tag degrades to [`HostPriority::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPriority {
    High,
    Normal,
}

impl HostPriority {
    /// Parse an embedder tag ("1" = high, anything else = normal).
    pub fn from_tag(tag: &str) -> Self {
        if tag == "1" {
            HostPriority::High
        } else {
            HostPriority::Normal
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            HostPriority::High => "1",
            HostPriority::Normal => "0",
        }
    }
}

impl Default for HostPriority {
    fn default() -> Self {
        HostPriority::Normal
    }
}

/// A single hostname awaiting prefetch.
/// Uses `Arc<str>` for zero-cost cloning between the pending set, the
/// dispatch loop, and the worker tasks.
#[derive(Debug, Clone)]
pub struct PrefetchRequest {
    pub host: Arc<str>,
    pub priority: HostPriority,
}

impl PrefetchRequest {
    pub fn new(host: impl Into<Arc<str>>, priority: HostPriority) -> Self {
        Self {
            host: host.into(),
            priority,
        }
    }
}

impl<S: Into<Arc<str>>> From<(S, HostPriority)> for PrefetchRequest {
    fn from((host, priority): (S, HostPriority)) -> Self {
        Self::new(host, priority)
    }
}
