use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

/// Ids with a mutation in flight.
///
/// Only one mutation per id may run at a time; different ids are
/// independent. Holding a [`BusyGuard`] is the capability to mutate that id,
/// and dropping it frees the id again.
#[derive(Clone, Debug, Default)]
pub struct BusySet {
    ids: Arc<Mutex<HashSet<String>>>,
}

impl BusySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a mutation for `id` may start right now.
    pub fn can_mutate(&self, id: &str) -> bool {
        !self.ids.lock().contains(id)
    }

    pub fn is_busy(&self, id: &str) -> bool {
        !self.can_mutate(id)
    }

    /// Claim `id`. Returns `None` if it is already claimed.
    pub fn try_begin(&self, id: &str) -> Option<BusyGuard> {
        let mut ids = self.ids.lock();
        if !ids.insert(id.to_string()) {
            return None;
        }
        Some(BusyGuard {
            set: self.clone(),
            id: id.to_string(),
        })
    }

    /// Currently claimed ids, sorted.
    pub fn snapshot(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.lock().iter().cloned().collect();
        ids.sort();
        ids
    }
}

/// Claim on one id; released on drop.
#[derive(Debug)]
pub struct BusyGuard {
    set: BusySet,
    id: String,
}

impl BusyGuard {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.set.ids.lock().remove(&self.id);
    }
}
