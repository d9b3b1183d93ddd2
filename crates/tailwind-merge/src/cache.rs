use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lru::LruCache;
use tracing::trace;

/// Memoizes merge results by their input.
///
/// A capacity of zero disables caching: lookups always miss and nothing is
/// stored.
pub(crate) struct MergeCache {
    inner: Option<Mutex<LruCache<String, String>>>,
}

impl MergeCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: NonZeroUsize::new(capacity).map(|capacity| Mutex::new(LruCache::new(capacity))),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let mut cache = self.lock()?;
        let hit = cache.get(key).cloned();
        if hit.is_some() {
            trace!(key, "merge cache hit");
        }
        hit
    }

    pub fn put(&self, key: String, value: String) {
        if let Some(mut cache) = self.lock() {
            cache.put(key, value);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |cache| cache.len())
    }

    /// Entries are written whole, so a poisoned cache is still usable.
    fn lock(&self) -> Option<MutexGuard<'_, LruCache<String, String>>> {
        self.inner
            .as_ref()
            .map(|cache| cache.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_after_put() {
        let cache = MergeCache::new(2);
        assert_eq!(cache.get("p-2 p-4"), None);
        cache.put("p-2 p-4".to_string(), "p-4".to_string());
        assert_eq!(cache.get("p-2 p-4").as_deref(), Some("p-4"));
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let cache = MergeCache::new(2);
        cache.put("a".to_string(), "1".to_string());
        cache.put("b".to_string(), "2".to_string());
        // Touch "a" so "b" becomes the oldest entry
        assert!(cache.get("a").is_some());
        cache.put("c".to_string(), "3".to_string());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("a").as_deref(), Some("1"));
        assert_eq!(cache.get("c").as_deref(), Some("3"));
    }

    #[test]
    fn test_zero_capacity_disables_cache() {
        let cache = MergeCache::new(0);
        cache.put("a".to_string(), "1".to_string());
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.len(), 0);
    }
}
