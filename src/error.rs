//! Error types for the caching layer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Errors reported by a backing key-value store.
///
/// The cache never produces these itself; they originate in [`KvStore`]
/// implementations and propagate to the caller unchanged. A failed lookup
/// is never cached.
///
/// [`KvStore`]: crate::store::KvStore
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but reported a failure
    #[error("Store request failed: {0}")]
    Backend(String),
}

// == Result Type Alias ==
/// Convenience Result type for store and cache operations.
pub type Result<T> = std::result::Result<T, StoreError>;
