//! Bounded memoization cache with access-count eviction
//!
//! Each entry carries the number of times it has been read. A fresh insert
//! starts at 1 and every hit adds 1. When an insert would take the cache past
//! its capacity, exactly one entry with the lowest count is evicted first.
//! Ties between equally-low entries are broken by map iteration order and
//! callers must not rely on which one goes.

use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Default maximum number of entries per cache
pub const DEFAULT_MAX_CACHE_SIZE: usize = 100;

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    access_count: u64,
}

/// Hit / miss / eviction counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups that were hits (0.0 when nothing was looked up)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Map of `key -> (value, access_count)` bounded by `capacity`
#[derive(Clone, Debug)]
pub struct AccessCountCache<K, V> {
    entries: FxHashMap<K, CacheEntry<V>>,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> AccessCountCache<K, V>
where
    K: Hash + Eq + Clone + Debug,
    V: Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity,
            stats: CacheStats::default(),
        }
    }

    /// Return the cached value for `key`, building and inserting it on a miss.
    ///
    /// `make` runs only on a miss. With a capacity of zero nothing is stored.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }

        self.stats.misses += 1;
        let value = make();
        if self.capacity == 0 {
            return value;
        }
        if self.entries.len() >= self.capacity {
            self.evict_least_accessed();
        }
        tracing::trace!("cache insert {:?}", key);
        self.entries.insert(
            key,
            CacheEntry {
                value: value.clone(),
                access_count: 1,
            },
        );
        value
    }

    /// Look up `key`, counting a hit if present. Misses are not recorded here.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.get_mut(key)?;
        entry.access_count += 1;
        self.stats.hits += 1;
        tracing::trace!("cache hit {:?} (count {})", key, entry.access_count);
        Some(entry.value.clone())
    }

    /// Look up `key` without touching its access count
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    pub fn access_count(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.access_count)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, evicting lowest-count entries until the cache fits
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.entries.len() > capacity {
            if self.evict_least_accessed().is_none() {
                break;
            }
        }
    }

    /// Remove one entry with the lowest access count, returning its key
    pub fn evict_least_accessed(&mut self) -> Option<K> {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.access_count)
            .map(|(key, entry)| (key.clone(), entry.access_count))?;

        self.entries.remove(&victim.0);
        self.stats.evictions += 1;
        tracing::debug!("cache evicted {:?} (count {})", victim.0, victim.1);
        Some(victim.0)
    }

    /// Drop every entry. Stats are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl<K, V> Default for AccessCountCache<K, V>
where
    K: Hash + Eq + Clone + Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CACHE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn hit_does_not_rebuild_and_bumps_count() {
        let mut cache: AccessCountCache<&str, u32> = AccessCountCache::new(4);
        let builds = Cell::new(0);
        let build = || {
            builds.set(builds.get() + 1);
            7
        };

        assert_eq!(cache.get_or_insert_with("a", build), 7);
        assert_eq!(cache.get_or_insert_with("a", build), 7);

        assert_eq!(builds.get(), 1);
        assert_eq!(cache.access_count(&"a"), Some(2));
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                evictions: 0
            }
        );
    }

    #[test]
    fn overflow_evicts_a_minimum_count_entry() {
        let max = 5;
        let mut cache: AccessCountCache<u32, u32> = AccessCountCache::new(max);
        for key in 0..max as u32 {
            cache.get_or_insert_with(key, || key);
        }
        // Everything except keys 1 and 3 gets a second read
        for key in [0, 2, 4] {
            cache.get(&key);
        }

        let before: Vec<(u32, u64)> = cache
            .keys()
            .map(|k| (*k, cache.access_count(k).unwrap()))
            .collect();
        let min = before.iter().map(|(_, c)| *c).min().unwrap();

        cache.get_or_insert_with(99, || 99);

        assert_eq!(cache.len(), max);
        let evicted: Vec<u32> = before
            .iter()
            .filter(|(k, _)| !cache.contains(k))
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(evicted.len(), 1);
        let evicted_count = before.iter().find(|(k, _)| *k == evicted[0]).unwrap().1;
        assert_eq!(evicted_count, min);
        assert!(evicted[0] == 1 || evicted[0] == 3);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache: AccessCountCache<u8, u8> = AccessCountCache::new(0);
        assert_eq!(cache.get_or_insert_with(1, || 1), 1);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn shrinking_capacity_evicts_down() {
        let mut cache: AccessCountCache<u8, u8> = AccessCountCache::new(4);
        for key in 0..4 {
            cache.get_or_insert_with(key, || key);
        }
        cache.get(&2);

        cache.set_capacity(1);

        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&2));
        assert_eq!(cache.stats().evictions, 3);
    }

    #[test]
    fn hit_rate_handles_empty_stats() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            evictions: 0,
        };
        assert_eq!(stats.hit_rate(), 0.75);
    }
}
