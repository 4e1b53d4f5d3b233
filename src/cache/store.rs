//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with hit/miss accounting.

use std::collections::HashMap;

use crate::cache::CacheStats;

// == Cache Store ==
/// In-memory mapping from string keys to string values.
///
/// Keys are unique; insertion order is irrelevant. All operations are total
/// over the key space, so none of them return errors. The store is owned
/// exclusively by the shell, so no locking discipline is required.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, String>,
    /// Hit/miss statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Inserts or overwrites an entry.
    ///
    /// Returns the previous value stored under `key`, if any. Empty keys and
    /// values are allowed.
    pub fn put(&mut self, key: String, value: String) -> Option<String> {
        self.stats.record_put();
        self.entries.insert(key, value)
    }

    // == Get ==
    /// Retrieves a value by key, recording a hit or a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes an entry by key.
    ///
    /// Returns the removed value, or `None` if the key was absent.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let old = self.entries.remove(key);
        if old.is_some() {
            self.stats.record_removal();
        }
        old
    }

    // == Keys ==
    /// Returns a snapshot of the keys currently held.
    ///
    /// The snapshot can be iterated any number of times; iteration order is
    /// unspecified.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Length ==
    /// Returns the current number of entries, O(1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Clear ==
    /// Removes all entries. Statistics counters are not reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns a copy of the current statistics counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new();

        let old = store.put("key1".to_string(), "value1".to_string());
        assert_eq!(old, None);
        assert_eq!(store.get("key1"), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite_returns_previous() {
        let mut store = CacheStore::new();

        store.put("key1".to_string(), "value1".to_string());
        let old = store.put("key1".to_string(), "value2".to_string());

        assert_eq!(old, Some("value1".to_string()));
        assert_eq!(store.get("key1"), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_remove() {
        let mut store = CacheStore::new();

        store.put("key1".to_string(), "value1".to_string());
        let old = store.remove("key1");

        assert_eq!(old, Some("value1".to_string()));
        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_remove_nonexistent() {
        let mut store = CacheStore::new();
        assert_eq!(store.remove("nonexistent"), None);
    }

    #[test]
    fn test_store_empty_key_and_value() {
        let mut store = CacheStore::new();

        store.put(String::new(), String::new());
        assert_eq!(store.get(""), Some(String::new()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_keys_snapshot() {
        let mut store = CacheStore::new();

        store.put("a".to_string(), "1".to_string());
        store.put("b".to_string(), "2".to_string());

        let mut keys = store.keys();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);

        // Snapshot is independent of later mutations
        store.remove("a");
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new();

        store.put("key1".to_string(), "value1".to_string());
        store.put("key2".to_string(), "value2".to_string());
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.keys().len(), 0);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();

        store.put("key1".to_string(), "value1".to_string());
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.remove("key1");
        store.remove("key1"); // absent, not counted

        let stats = store.stats();
        assert_eq!(stats.puts, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.removals, 1);
    }
}
