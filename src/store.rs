//! Key-Value Store Contract
//!
//! Defines the capability exposed by the backing store and, by extension,
//! by any cache placed in front of it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

// == KvStore Trait ==
/// Capability contract of a key-value store.
///
/// The backing store is assumed to be remote: `get` may carry a full network
/// round trip (~100ms), while `keys` and `m_get` are rarely called and need
/// no latency optimization.
///
/// Absent keys are modeled as `Ok(None)`, and a cache in front of the store
/// is permitted to cache absence like any other value. Callers interpret
/// `None` per the store's own contract.
///
/// All methods must be safe to call concurrently.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Retrieves a single value by key (the frequent operation).
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Lists all keys in the store (rare).
    async fn keys(&self) -> Result<Vec<String>>;

    /// Retrieves values for a batch of keys (rare).
    ///
    /// The result has one element per requested key, in request order,
    /// with `None` standing in for absent keys.
    async fn m_get(&self, keys: &[String]) -> Result<Vec<Option<String>>>;
}

// == Shared Handle Delegation ==
/// A shared handle to a store is itself a store.
#[async_trait]
impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn keys(&self) -> Result<Vec<String>> {
        (**self).keys().await
    }

    async fn m_get(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        (**self).m_get(keys).await
    }
}
