//! Read-Through Cache Module
//!
//! Decorator over a [`KvStore`] that caches single-key gets in memory and
//! clears the whole mapping on a fixed period.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, StatsSnapshot};
use crate::config::Config;
use crate::error::Result;
use crate::store::KvStore;
use crate::tasks::{spawn_eviction_task, CacheMap};

// == Read-Through Cache ==
/// Transparent read-through cache in front of a slow key-value store.
///
/// Implements [`KvStore`] itself, so it is a drop-in substitute for the raw
/// store. Single-key `get` is intercepted and served from an in-memory
/// mapping when possible; `keys` and `m_get` delegate straight through.
///
/// Staleness is bounded by full-clear eviction: a background task owned by
/// the cache clears the entire mapping every TTL interval. There is no
/// per-key expiry and no size bound.
#[derive(Debug)]
pub struct ReadThroughCache<S: KvStore> {
    /// Handle to the backing store, used only for delegation
    store: Arc<S>,
    /// Key-value mapping shared with the eviction task
    data: Arc<CacheMap>,
    /// Hit/miss counters
    stats: Arc<CacheStats>,
    /// Handle to the periodic eviction task
    evictor: JoinHandle<()>,
}

impl<S: KvStore> ReadThroughCache<S> {
    // == Constructor ==
    /// Creates a cache over `store` that fully evicts every `ttl`.
    ///
    /// Spawns the eviction task immediately, so this must be called from
    /// within a tokio runtime; if the task cannot be scheduled, construction
    /// panics rather than returning a cache that never evicts.
    pub fn new(store: S, ttl: Duration) -> Self {
        let data: Arc<CacheMap> = Arc::new(RwLock::new(HashMap::new()));
        let evictor = spawn_eviction_task(data.clone(), ttl);

        Self {
            store: Arc::new(store),
            data,
            stats: Arc::new(CacheStats::new()),
            evictor,
        }
    }

    /// Creates a cache with the TTL taken from configuration.
    pub fn from_config(store: S, config: &Config) -> Self {
        Self::new(store, config.ttl())
    }

    // == Stop ==
    /// Stops the background eviction task.
    ///
    /// Dropping the cache does the same; this exists for callers that tear
    /// down explicitly and want the scheduling resource released before the
    /// value goes out of scope.
    pub fn stop(&self) {
        self.evictor.abort();
    }

    // == Stats ==
    /// Returns a snapshot of the hit/miss counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // == Length ==
    /// Returns the number of entries currently cached.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is cached since the last eviction sweep.
    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

impl<S: KvStore> Drop for ReadThroughCache<S> {
    fn drop(&mut self) {
        self.evictor.abort();
        debug!("Eviction task aborted on cache drop");
    }
}

#[async_trait]
impl<S: KvStore> KvStore for ReadThroughCache<S> {
    /// Serves a single-key get, populating the mapping on a miss.
    ///
    /// Fast path: a shared-lock lookup that never blocks other readers.
    /// On a miss the store is awaited with no lock held, then the result is
    /// inserted under the write lock. Two concurrent misses for one key may
    /// both hit the store; both insert the same correct value. An eviction
    /// sweep between fetch and insert can reinstate the entry for up to one
    /// extra TTL period, which keeps staleness bounded by two periods in the
    /// worst case.
    async fn get(&self, key: &str) -> Result<Option<String>> {
        {
            let data = self.data.read().await;
            if let Some(value) = data.get(key) {
                self.stats.record_hit();
                return Ok(value.clone());
            }
        }

        self.stats.record_miss();

        // The slow network call runs outside any lock. Errors propagate
        // here and never reach the mapping.
        let value = self.store.get(key).await?;

        let mut data = self.data.write().await;
        data.insert(key.to_string(), value.clone());
        Ok(value)
    }

    /// Passthrough: no interception, no mapping access.
    async fn keys(&self) -> Result<Vec<String>> {
        self.store.keys().await
    }

    /// Passthrough: no interception, no mapping access.
    async fn m_get(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        self.store.m_get(keys).await
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory store that counts single-key gets.
    struct CountingStore {
        values: HashMap<String, String>,
        get_calls: AtomicUsize,
        fail_gets: bool,
    }

    impl CountingStore {
        fn with_values(pairs: &[(&str, &str)]) -> Self {
            Self {
                values: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                get_calls: AtomicUsize::new(0),
                fail_gets: false,
            }
        }

        fn failing() -> Self {
            Self {
                values: HashMap::new(),
                get_calls: AtomicUsize::new(0),
                fail_gets: true,
            }
        }

        fn get_calls(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl KvStore for CountingStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_gets {
                return Err(StoreError::Unavailable("connection refused".to_string()));
            }
            Ok(self.values.get(key).cloned())
        }

        async fn keys(&self) -> Result<Vec<String>> {
            let mut keys: Vec<String> = self.values.keys().cloned().collect();
            keys.sort();
            Ok(keys)
        }

        async fn m_get(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
            Ok(keys.iter().map(|k| self.values.get(k).cloned()).collect())
        }
    }

    fn cache_over(
        pairs: &[(&str, &str)],
        ttl: Duration,
    ) -> (ReadThroughCache<Arc<CountingStore>>, Arc<CountingStore>) {
        let store = Arc::new(CountingStore::with_values(pairs));
        (ReadThroughCache::new(store.clone(), ttl), store)
    }

    #[tokio::test]
    async fn test_miss_fetches_and_populates() {
        let (cache, store) = cache_over(&[("k1", "1.2.3.4")], Duration::from_secs(60));

        let value = cache.get("k1").await.unwrap();

        assert_eq!(value, Some("1.2.3.4".to_string()));
        assert_eq!(store.get_calls(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_hit_avoids_store_call() {
        let (cache, store) = cache_over(&[("k1", "1.2.3.4")], Duration::from_secs(60));

        for _ in 0..5 {
            let value = cache.get("k1").await.unwrap();
            assert_eq!(value, Some("1.2.3.4".to_string()));
        }

        assert_eq!(store.get_calls(), 1, "Repeated gets must hit the mapping");

        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 4);
    }

    #[tokio::test]
    async fn test_absent_key_is_cached() {
        let (cache, store) = cache_over(&[], Duration::from_secs(60));

        assert_eq!(cache.get("ghost").await.unwrap(), None);
        assert_eq!(cache.get("ghost").await.unwrap(), None);

        // Absence is an ordinary cacheable value
        assert_eq!(store.get_calls(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_error_propagates_uncached() {
        let store = Arc::new(CountingStore::failing());
        let cache = ReadThroughCache::new(store.clone(), Duration::from_secs(60));

        let err = cache.get("k1").await.unwrap_err();
        assert_eq!(
            err,
            StoreError::Unavailable("connection refused".to_string())
        );
        assert!(cache.is_empty().await, "Failed lookups must not populate");

        // A retry reaches the store again
        let _ = cache.get("k1").await;
        assert_eq!(store.get_calls(), 2);
    }

    #[tokio::test]
    async fn test_keys_passthrough_skips_mapping() {
        let (cache, _store) =
            cache_over(&[("a", "1"), ("b", "2")], Duration::from_secs(60));

        let keys = cache.keys().await.unwrap();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
        assert!(cache.is_empty().await, "keys() must not populate the mapping");
    }

    #[tokio::test]
    async fn test_m_get_passthrough_skips_mapping() {
        let (cache, store) =
            cache_over(&[("a", "1"), ("b", "2")], Duration::from_secs(60));

        let request = vec!["a".to_string(), "missing".to_string(), "b".to_string()];
        let values = cache.m_get(&request).await.unwrap();

        assert_eq!(
            values,
            vec![Some("1".to_string()), None, Some("2".to_string())]
        );
        assert!(cache.is_empty().await, "m_get() must not populate the mapping");
        assert_eq!(store.get_calls(), 0);
    }

    #[tokio::test]
    async fn test_eviction_forces_refetch() {
        let (cache, store) = cache_over(&[("k1", "1.2.3.4")], Duration::from_millis(100));

        assert_eq!(
            cache.get("k1").await.unwrap(),
            Some("1.2.3.4".to_string())
        );

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(
            cache.get("k1").await.unwrap(),
            Some("1.2.3.4".to_string())
        );
        assert_eq!(store.get_calls(), 2, "Entry must not survive past one TTL");
    }

    #[tokio::test]
    async fn test_stop_finishes_evictor() {
        let (cache, _store) = cache_over(&[], Duration::from_secs(60));

        cache.stop();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(cache.evictor.is_finished());
    }
}
