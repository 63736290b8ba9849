use hostwarm_domain::HostPriority;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Hostnames awaiting dispatch, split into the two priority classes.
///
/// Map semantics over the union of both sets: a hostname lives in at most one
/// class, and a re-insert moves it to the class supplied last. Order inside a
/// class is not tracked; the dispatch loop only guarantees class alternation.
#[derive(Debug, Default)]
pub struct PendingSet {
    high: FxHashSet<Arc<str>>,
    normal: FxHashSet<Arc<str>>,
}

impl PendingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.normal.is_empty()
    }

    pub fn len(&self) -> usize {
        self.high.len() + self.normal.len()
    }

    /// Single-host intake with the one-page-at-a-time guard: the insert is
    /// refused while anything is still pending.
    pub fn insert_guarded(&mut self, host: Arc<str>, priority: HostPriority) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.insert(host, priority);
        true
    }

    /// Unconditional insert; the last supplied priority wins.
    pub fn insert(&mut self, host: Arc<str>, priority: HostPriority) {
        match priority {
            HostPriority::High => {
                self.normal.remove(&host);
                self.high.insert(host);
            }
            HostPriority::Normal => {
                self.high.remove(&host);
                self.normal.insert(host);
            }
        }
    }

    /// Merge a whole page batch, bypassing the intake guard.
    /// Returns the total pending count after the merge.
    pub fn merge<I>(&mut self, hosts: I) -> usize
    where
        I: IntoIterator<Item = (Arc<str>, HostPriority)>,
    {
        for (host, priority) in hosts {
            self.insert(host, priority);
        }
        self.len()
    }

    /// Remove and return up to `limit` hosts of one priority class.
    pub fn take_class(&mut self, class: HostPriority, limit: usize) -> Vec<Arc<str>> {
        let set = match class {
            HostPriority::High => &mut self.high,
            HostPriority::Normal => &mut self.normal,
        };
        let take = limit.min(set.len());
        let mut batch = Vec::with_capacity(take);
        while batch.len() < take {
            // FxHashSet has no pop(); pull an arbitrary element.
            let host = match set.iter().next() {
                Some(h) => Arc::clone(h),
                None => break,
            };
            set.remove(&host);
            batch.push(host);
        }
        batch
    }

    /// Drop everything still pending. Returns how many hosts were discarded.
    pub fn clear(&mut self) -> usize {
        let dropped = self.len();
        self.high.clear();
        self.normal.clear();
        dropped
    }

    #[cfg(test)]
    pub fn contains(&self, host: &str) -> bool {
        self.high.contains(host) || self.normal.contains(host)
    }

    #[cfg(test)]
    pub fn class_of(&self, host: &str) -> Option<HostPriority> {
        if self.high.contains(host) {
            Some(HostPriority::High)
        } else if self.normal.contains(host) {
            Some(HostPriority::Normal)
        } else {
            None
        }
    }
}
