//! Evictor Module
//!
//! Implements hysteresis-band bulk eviction: a cleaning cycle starts when
//! occupancy reaches capacity and ends once a write observes occupancy at or
//! below the border, removing a bounded batch of old entries per write.

use tracing::debug;

use crate::cache::store::EntryStore;
use crate::cache::{EVICTION_BATCH, MIN_CAPACITY};

// == Evictor ==
/// Hysteresis-band eviction policy.
///
/// Capacity is the high threshold, the border (98% of capacity) the low one.
/// Once a cleaning cycle starts it continues across write calls until the
/// border is reached, so eviction work is amortized over several writes
/// instead of one unbounded pass.
#[derive(Debug)]
pub struct Evictor {
    /// Maximum occupancy before a cleaning cycle starts
    capacity: usize,
    /// Occupancy a cleaning cycle must reach before it ends
    border: usize,
    /// True while a cleaning cycle is in progress
    cleaning: bool,
}

impl Evictor {
    // == Constructor ==
    /// Creates an evictor for the requested capacity.
    ///
    /// Requested capacities below [`MIN_CAPACITY`] are raised to the floor;
    /// the border is `capacity * 98 / 100`.
    pub fn new(requested_capacity: usize) -> Self {
        let capacity = requested_capacity.max(MIN_CAPACITY);
        Self {
            capacity,
            border: capacity * 98 / 100,
            cleaning: false,
        }
    }

    // == Balance ==
    /// Runs the balancing check for one write and returns the number of
    /// entries evicted.
    ///
    /// Occupancy is read once at entry and drives all three decisions; the
    /// deactivation check uses that same snapshot, so a cleaning cycle only
    /// ends when a write already observes occupancy at or below the border.
    /// Per-write eviction work is capped at [`EVICTION_BATCH`] removals,
    /// which bounds worst-case store latency.
    pub fn balance<V>(&mut self, store: &mut EntryStore<V>) -> usize {
        let occupancy = store.len();
        let mut evicted = 0;

        if !self.cleaning && occupancy >= self.capacity {
            self.cleaning = true;
            debug!(occupancy, capacity = self.capacity, "cleaning cycle started");
            evicted = self.evict_batch(store);
        } else if self.cleaning && occupancy > self.border {
            evicted = self.evict_batch(store);
        }

        if self.cleaning && occupancy <= self.border {
            self.cleaning = false;
            debug!(occupancy, border = self.border, "cleaning cycle finished");
        }

        evicted
    }

    // == Evict Batch ==
    /// Removes up to [`EVICTION_BATCH`] oldest entries, stopping early if
    /// the store runs empty.
    fn evict_batch<V>(&mut self, store: &mut EntryStore<V>) -> usize {
        let mut evicted = 0;
        for _ in 0..EVICTION_BATCH {
            if store.evict_oldest().is_none() {
                break;
            }
            evicted += 1;
        }
        evicted
    }

    // == Capacity ==
    /// Effective capacity after the floor is applied.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Border ==
    /// Low-water mark a cleaning cycle drives occupancy down to.
    pub fn border(&self) -> usize {
        self.border
    }

    // == Is Cleaning ==
    /// Returns true while a cleaning cycle is in progress.
    pub fn is_cleaning(&self) -> bool {
        self.cleaning
    }
}
