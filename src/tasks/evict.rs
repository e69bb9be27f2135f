//! Periodic Eviction Task
//!
//! Background task that clears the entire cache mapping on a fixed period.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// The shared key-value mapping guarded by a read/write lock.
///
/// Values are `Option<String>` because the backing store's absence sentinel
/// is cached like any other value.
pub type CacheMap = RwLock<HashMap<String, Option<String>>>;

/// Spawns a background task that clears the whole mapping every `ttl`.
///
/// The task sleeps for one full TTL interval before its first sweep, then
/// fires every interval thereafter. Each sweep takes the write lock and
/// clears the mapping unconditionally; there is no per-entry expiry, so no
/// entry can outlive one TTL period.
///
/// Must be called from within a tokio runtime; spawning outside one panics,
/// which surfaces a scheduling failure at construction time rather than
/// leaving a cache that silently never evicts.
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort the task when the cache
/// is torn down.
///
/// # Example
/// ```ignore
/// let data = Arc::new(RwLock::new(HashMap::new()));
/// let evictor = spawn_eviction_task(data.clone(), Duration::from_secs(300));
/// // Later, during teardown:
/// evictor.abort();
/// ```
pub fn spawn_eviction_task(data: Arc<CacheMap>, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting eviction task with period of {:?}", ttl);

        loop {
            // First firing is one TTL after spawn
            tokio::time::sleep(ttl).await;

            // Acquire write lock and clear everything
            let removed = {
                let mut guard = data.write().await;
                let count = guard.len();
                guard.clear();
                count
            };

            if removed > 0 {
                info!("Eviction sweep: cleared {} entries", removed);
            } else {
                debug!("Eviction sweep: mapping already empty");
            }
        }
    })
}
