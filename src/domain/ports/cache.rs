use chrono::{DateTime, Utc};

/// Source of "now". Injected so TTL behaviour can be tested without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// A stored value plus the moment it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub created_at: DateTime<Utc>,
    pub value: V,
}

/// Keyed store whose entries expire a fixed time after they were written.
///
/// Expiry is lazy: a stale entry is dropped by the next `get` that sees it.
/// Concurrent writers to the same key are allowed; the last write wins.
pub trait TtlStore<V>: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheEntry<V>>;
    fn set(&self, key: String, value: V);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
