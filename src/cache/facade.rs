//! Cache Facade Module
//!
//! The public cache surface: sequences key canonicalization, the eviction
//! balancing check and store mutation under a single mutex.

use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::cache::evictor::Evictor;
use crate::cache::key::canonicalize;
use crate::cache::stats::CacheStats;
use crate::cache::store::EntryStore;
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Inner State ==
/// Store and evictor state form one unit of shared mutable state; they are
/// only touched while the facade lock is held.
#[derive(Debug)]
struct Inner<V> {
    store: EntryStore<V>,
    evictor: Evictor,
}

// == Cache ==
/// A bounded, thread-safe in-memory memoization cache.
///
/// Keys are arbitrary serializable values compared structurally: two keys
/// with the same shape and field values address the same slot. Values are
/// cloned out on lookup. Once occupancy reaches capacity, old entries are
/// evicted in small batches until occupancy falls below the border (98% of
/// capacity), amortizing eviction cost across writes.
///
/// Eviction order is approximate LRU: the victim is the entry with the
/// oldest recorded access time, with unspecified tie-breaking among
/// near-simultaneous accesses.
///
/// # Example
/// ```
/// use memo_cache::Cache;
///
/// let cache: Cache<u64> = Cache::new(1000);
///
/// assert!(cache.store(&("fib", 32u32), 2_178_309));
/// assert_eq!(cache.load(&("fib", 32u32)).unwrap(), 2_178_309);
/// assert!(cache.load(&("fib", 33u32)).is_err());
/// ```
#[derive(Debug)]
pub struct Cache<V> {
    inner: Mutex<Inner<V>>,
}

impl<V: Clone> Cache<V> {
    // == Constructor ==
    /// Creates a cache with the given capacity.
    ///
    /// Requested capacities below [`MIN_CAPACITY`](crate::cache::MIN_CAPACITY)
    /// are silently raised to the floor.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                store: EntryStore::new(),
                evictor: Evictor::new(capacity),
            }),
        }
    }

    /// Creates a cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity)
    }

    // == Store ==
    /// Writes a value under the given key, replacing any existing value.
    ///
    /// The eviction balancing check runs before the insert, inside the same
    /// critical section. Returns `false` only when the key cannot be
    /// canonicalized, in which case the store is left untouched.
    pub fn store<K>(&self, key: &K, value: V) -> bool
    where
        K: Serialize + ?Sized,
    {
        let canonical_key = match canonicalize(key) {
            Ok(ck) => ck,
            Err(err) => {
                debug!(error = %err, "store rejected: key cannot be canonicalized");
                return false;
            }
        };

        let mut inner = self.inner.lock();
        let Inner { store, evictor } = &mut *inner;
        evictor.balance(store);
        store.upsert(canonical_key, value);
        true
    }

    // == Load ==
    /// Looks up the value stored under the given key, refreshing its
    /// last-access timestamp on a hit.
    ///
    /// # Errors
    /// - [`CacheError::NotFound`] when the key is absent.
    /// - [`CacheError::KeySerialization`] when the key cannot be
    ///   canonicalized. Callers can treat both as a miss; the distinction is
    ///   preserved for diagnostics.
    pub fn load<K>(&self, key: &K) -> Result<V>
    where
        K: Serialize + ?Sized,
    {
        let canonical_key = match canonicalize(key) {
            Ok(ck) => ck,
            Err(err) => {
                debug!(error = %err, "load rejected: key cannot be canonicalized");
                return Err(err);
            }
        };

        let mut inner = self.inner.lock();
        inner
            .store
            .get_and_touch(&canonical_key)
            .ok_or(CacheError::NotFound(canonical_key))
    }

    // == Length ==
    /// Current number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().store.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().store.is_empty()
    }

    // == Capacity ==
    /// Effective capacity after the floor is applied.
    pub fn capacity(&self) -> usize {
        self.inner.lock().evictor.capacity()
    }

    // == Stats ==
    /// Returns a snapshot of hit/miss/eviction statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().store.stats()
    }
}
