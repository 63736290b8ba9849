use serde::{Deserialize, Serialize};

/// DNS prefetch configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PrefetchConfig {
    /// Number of concurrent resolution worker slots
    #[serde(default = "default_worker_slots")]
    pub worker_slots: usize,

    /// Maximum hostnames dispatched per page (per drain burst)
    #[serde(default = "default_max_queries_per_page")]
    pub max_queries_per_page: usize,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            worker_slots: default_worker_slots(),
            max_queries_per_page: default_max_queries_per_page(),
        }
    }
}

fn default_worker_slots() -> usize {
    8
}

fn default_max_queries_per_page() -> usize {
    64
}
