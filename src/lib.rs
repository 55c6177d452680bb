//! Memo Cache - a bounded in-memory memoization cache
//!
//! Stores computed results under arbitrary serializable keys and keeps
//! occupancy bounded with hysteresis-band eviction of old entries.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
