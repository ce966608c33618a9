//! In-memory LRU cache with per-entry expiry.
//!
//! Entries live for a fixed time-to-live and are evicted on the first lookup
//! after they expire. The least recently used entry is dropped when the cache
//! is full. Nothing is written to disk.

use lru::LruCache;
use std::{
    hash::Hash,
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard},
    time::{Duration, Instant},
};

/// Whether a value came from the cache or from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
    Refreshed,
}

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

pub struct TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    entries: Mutex<LruCache<K, Entry<V>>>,
    ttl: Duration,
    capacity: NonZeroUsize,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
            capacity,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Look up `key` as of `now`, evicting it if it has expired.
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let mut entries = self.lock();
        let expired = match entries.get(key) {
            Some(entry) if now.saturating_duration_since(entry.stored_at) < self.ttl => {
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.pop(key);
            tracing::debug!("cache entry expired");
        }
        None
    }

    pub fn put(&self, key: K, value: V) {
        self.put_at(key, value, Instant::now());
    }

    pub fn put_at(&self, key: K, value: V, now: Instant) {
        self.lock().put(
            key,
            Entry {
                value,
                stored_at: now,
            },
        );
    }

    pub fn invalidate(&self, key: &K) {
        self.lock().pop(key);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// (entries, capacity)
    pub fn stats(&self) -> (usize, usize) {
        (self.lock().len(), self.capacity.get())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Entry<V>>> {
        // Entries are plain data, so a poisoned lock is still usable
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_put_then_get_hits() {
        let cache: TtlCache<&str, u32> = TtlCache::new(4, HOUR);
        cache.put("2025-01-06", 7);

        assert_eq!(cache.get(&"2025-01-06"), Some(7));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let cache: TtlCache<&str, u32> = TtlCache::new(4, HOUR);
        assert_eq!(cache.get(&"nope"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache: TtlCache<u8, &str> = TtlCache::new(4, HOUR);
        let start = Instant::now();
        cache.put_at(1, "schedule", start);

        assert_eq!(
            cache.get_at(&1, start + Duration::from_secs(3599)),
            Some("schedule")
        );
        assert_eq!(cache.get_at(&1, start + HOUR), None);
        // Expired entries are evicted on lookup
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lookup_before_store_time_is_fresh() {
        let cache: TtlCache<u8, u8> = TtlCache::new(2, HOUR);
        let later = Instant::now() + Duration::from_secs(10);
        cache.put_at(1, 1, later);

        assert_eq!(cache.get_at(&1, Instant::now()), Some(1));
    }

    #[test]
    fn test_lru_eviction() {
        let cache: TtlCache<u8, u8> = TtlCache::new(2, HOUR);
        cache.put(1, 10);
        cache.put(2, 20);

        // Touch 1 so 2 becomes least recently used
        assert_eq!(cache.get(&1), Some(10));
        cache.put(3, 30);

        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some(10));
        assert_eq!(cache.get(&3), Some(30));
        assert_eq!(cache.stats(), (2, 2));
    }

    #[test]
    fn test_put_replaces_and_restarts_ttl() {
        let cache: TtlCache<u8, u8> = TtlCache::new(2, HOUR);
        let start = Instant::now();
        cache.put_at(1, 1, start);
        cache.put_at(1, 2, start + Duration::from_secs(3000));

        assert_eq!(cache.get_at(&1, start + Duration::from_secs(4000)), Some(2));
    }

    #[test]
    fn test_invalidate_and_clear() {
        let cache: TtlCache<u8, u8> = TtlCache::new(4, HOUR);
        cache.put(1, 1);
        cache.put(2, 2);

        cache.invalidate(&1);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_ttl_and_stats_report_configuration() {
        let cache: TtlCache<u8, u8> = TtlCache::new(8, HOUR);
        cache.put(1, 1);

        assert_eq!(cache.ttl(), HOUR);
        assert_eq!(cache.stats(), (1, 8));
    }

    #[test]
    fn test_zero_capacity_is_bumped_to_one() {
        let cache: TtlCache<u8, u8> = TtlCache::new(0, HOUR);
        cache.put(1, 1);
        cache.put(2, 2);

        assert_eq!(cache.stats(), (1, 1));
        assert_eq!(cache.get(&2), Some(2));
    }

    #[test]
    fn test_cache_is_shareable_across_threads() {
        use std::sync::Arc;

        let cache: Arc<TtlCache<u32, u32>> = Arc::new(TtlCache::new(64, HOUR));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..8 {
                        cache.put(t * 8 + i, i);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 32);
    }
}
