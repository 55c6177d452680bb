//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with recency tracking.

use std::time::Instant;

// == Cache Entry ==
/// A single cache entry: the stored value and its last-access time.
///
/// Entries are owned exclusively by the store; lookups hand out clones of
/// the value, never references into the map.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic timestamp of the most recent store or lookup
    pub last_access: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            last_access: Instant::now(),
        }
    }

    // == Touch ==
    /// Refreshes the last-access timestamp to the current instant.
    ///
    /// `Instant` is monotonic, so the timestamp never moves backwards even
    /// when the wall clock is adjusted.
    pub fn touch(&mut self) {
        self.last_access = Instant::now();
    }
}
