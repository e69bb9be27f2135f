//! Cache Module
//!
//! Provides the read-through cache and its hit/miss accounting.

mod read_through;
mod stats;


// Re-export public types
pub use read_through::ReadThroughCache;
pub use stats::{CacheStats, StatsSnapshot};
