//! Read-Through Cache - a transparent caching layer for slow key-value stores
//!
//! Wraps any [`KvStore`] and absorbs repeated single-key gets in memory,
//! with staleness bounded by periodic full eviction.

pub mod cache;
pub mod config;
pub mod error;
pub mod store;
pub mod tasks;

pub use cache::{ReadThroughCache, StatsSnapshot};
pub use config::Config;
pub use error::{Result, StoreError};
pub use store::KvStore;
