//! Bounded TTL cache for rendered API responses.
//!
//! Explicit lifecycle: construct one at startup, hand it to route state by
//! `Arc`. Entries expire after a fixed TTL and the map is capped — inserting
//! at capacity evicts the oldest entry first.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

struct CacheEntry {
    value: serde_json::Value,
    inserted_at: Instant,
}

/// TTL + capacity bounded in-memory response cache.
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
}

impl ResponseCache {
    /// Create a cache holding at most `max_entries` values for `ttl` each.
    pub fn new(ttl: Duration, max_entries: usize) -> Arc<Self> {
        Arc::new(Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
        })
    }

    /// Fetch a fresh value. Expired entries count as absent.
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.inserted_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Store a value, evicting the oldest entry when at capacity.
    pub async fn insert(&self, key: impl Into<String>, value: serde_json::Value) {
        let key = key.into();
        let mut entries = self.entries.write().await;

        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            if let Some(oldest) = entries
                .iter()
                .min_by_key(|(_, e)| e.inserted_at)
                .map(|(k, _)| k.clone())
            {
                debug!(key = %oldest, "Cache at capacity, evicting oldest entry");
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop a single entry. Returns whether it existed.
    pub async fn invalidate(&self, key: &str) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    /// Sweep out every expired entry. Returns the number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.inserted_at.elapsed() < self.ttl);
        let removed = before - entries.len();
        if removed > 0 {
            debug!(count = removed, "Purged expired cache entries");
        }
        removed
    }

    /// Number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Spawn a background task that periodically sweeps expired entries.
pub fn spawn_eviction_task(
    cache: Arc<ResponseCache>,
    interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(interval);
        loop {
            interval.tick().await;
            cache.purge_expired().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_get() {
        let cache = ResponseCache::new(Duration::from_secs(60), 8);
        cache.insert("a", serde_json::json!({"n": 1})).await;

        let hit = cache.get("a").await.unwrap();
        assert_eq!(hit["n"], 1);
        assert!(cache.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn expired_entries_read_as_absent() {
        let cache = ResponseCache::new(Duration::from_millis(20), 8);
        cache.insert("a", serde_json::json!(true)).await;
        assert!(cache.get("a").await.is_some());

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(cache.get("a").await.is_none());
        // Still physically present until a sweep runs.
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn purge_removes_only_expired() {
        let cache = ResponseCache::new(Duration::from_millis(30), 8);
        cache.insert("old", serde_json::json!(1)).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        cache.insert("fresh", serde_json::json!(2)).await;

        let removed = cache.purge_expired().await;
        assert_eq!(removed, 1);
        assert!(cache.get("fresh").await.is_some());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn capacity_evicts_oldest() {
        let cache = ResponseCache::new(Duration::from_secs(60), 2);
        cache.insert("first", serde_json::json!(1)).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        cache.insert("second", serde_json::json!(2)).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        cache.insert("third", serde_json::json!(3)).await;

        assert_eq!(cache.len().await, 2);
        assert!(cache.get("first").await.is_none());
        assert!(cache.get("second").await.is_some());
        assert!(cache.get("third").await.is_some());
    }

    #[tokio::test]
    async fn reinserting_existing_key_does_not_evict() {
        let cache = ResponseCache::new(Duration::from_secs(60), 2);
        cache.insert("a", serde_json::json!(1)).await;
        cache.insert("b", serde_json::json!(2)).await;
        cache.insert("a", serde_json::json!(3)).await;

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.get("a").await.unwrap(), serde_json::json!(3));
        assert!(cache.get("b").await.is_some());
    }

    #[tokio::test]
    async fn invalidate_drops_entry() {
        let cache = ResponseCache::new(Duration::from_secs(60), 8);
        cache.insert("a", serde_json::json!(1)).await;

        assert!(cache.invalidate("a").await);
        assert!(!cache.invalidate("a").await);
        assert!(cache.is_empty().await);
    }
}
