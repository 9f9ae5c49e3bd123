use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use parking_lot::RwLock;
use tracing::trace;

use crate::domain::ports::cache::{CacheEntry, Clock, TtlStore};

/// Process-lifetime TTL store. Reads share the lock; a stale entry is
/// removed by the read that finds it.
pub struct MemoryTtlCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V> MemoryTtlCache<V> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }
}

impl<V: Clone + Send + Sync> TtlStore<V> for MemoryTtlCache<V> {
    fn get(&self, key: &str) -> Option<CacheEntry<V>> {
        let now = self.clock.now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if now - entry.created_at < self.ttl => return Some(entry.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        let mut entries = self.entries.write();
        // Re-check: a writer may have refreshed the key in between.
        if entries
            .get(key)
            .is_some_and(|entry| now - entry.created_at >= self.ttl)
        {
            entries.remove(key);
            trace!(key, "expired cache entry dropped");
        }
        None
    }

    fn set(&self, key: String, value: V) {
        let entry = CacheEntry {
            created_at: self.clock.now(),
            value,
        };
        self.entries.write().insert(key, entry);
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}
