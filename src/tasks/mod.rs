//! Background Tasks Module
//!
//! Contains background tasks owned by a cache instance.
//!
//! # Tasks
//! - Periodic eviction: clears the entire cache mapping every TTL interval

mod evict;

pub use evict::{spawn_eviction_task, CacheMap};
