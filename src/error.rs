//! Error types for the memoization cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Both variants are recoverable and reported synchronously to the caller;
/// neither leaves the store in an inconsistent state.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not present in the cache (cold start or evicted)
    #[error("key not found in cache: {0}")]
    NotFound(String),

    /// Key could not be canonicalized into a deterministic string
    #[error("key cannot be serialized: {0}")]
    KeySerialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
