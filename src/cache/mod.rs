//! Cache Module
//!
//! Provides the bounded memoization cache: canonical keys, the entry store
//! and the hysteresis-band evictor behind a single-lock facade.

mod entry;
mod evictor;
mod facade;
mod key;
mod stats;
mod store;


// Re-export public types
pub use facade::Cache;
pub use stats::CacheStats;

// == Public Constants ==
/// Minimum effective capacity; smaller requested capacities are raised to this floor
pub const MIN_CAPACITY: usize = 100;

/// Maximum number of entries removed per balancing call
pub const EVICTION_BATCH: usize = 2;
