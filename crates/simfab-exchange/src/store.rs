//! `InfoStore<T>` — per-payload-type, double-buffered, producer-keyed store.
//!
//! # Why two buffers
//!
//! Each store holds two maps for a single payload type: one for the tick
//! currently in progress and one for the previous tick.  Producers append
//! to the current map; consumers query either map.  Reading the previous
//! map is how a cyclic producer/consumer pair is broken: one side of the
//! cycle consumes the other's *last-tick* output, which is complete no
//! matter how the current tick's models are scheduled.
//!
//! # Concurrency
//!
//! A single `RwLock` per store protects both maps.  Producers and the
//! epoch swap take the write lock; readers take the read lock and receive
//! a snapshot by value, so they never race a concurrent producer on the
//! same store.

use std::collections::BTreeMap;
use std::mem;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use simfab_core::ModelInstanceId;

/// Marker for types that can be carried through an [`InfoStore`].
///
/// Payloads are opaque to the framework: anything cloneable and shareable
/// across the tick fan-out qualifies.  The blanket impl means user code
/// never implements this by hand.
pub trait Payload: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Payload for T {}

/// Per-producer payload buffers for one payload type.
#[derive(Default)]
struct Buffers<T> {
    /// Data produced within the tick in progress (or just completed, before
    /// the epoch swap).
    current: BTreeMap<ModelInstanceId, Vec<T>>,
    /// Data produced in the immediately prior tick.  Empty before the first
    /// epoch swap.
    previous: BTreeMap<ModelInstanceId, Vec<T>>,
}

/// Thread-safe store for the information one payload type's producers
/// publish each tick, keyed by producing model instance.
///
/// A store for a given payload type should be treated as a singleton owned
/// by the [`Exchange`][crate::Exchange]; models hold a shared reference to
/// the exchange and look their stores up by type.
pub struct InfoStore<T: Payload> {
    buffers: RwLock<Buffers<T>>,
}

impl<T: Payload> InfoStore<T> {
    pub fn new() -> Self {
        Self {
            buffers: RwLock::new(Buffers {
                current: BTreeMap::new(),
                previous: BTreeMap::new(),
            }),
        }
    }

    // A panicking producer cannot leave the maps structurally torn, so a
    // poisoned lock is recovered rather than propagated.
    fn read(&self) -> RwLockReadGuard<'_, Buffers<T>> {
        self.buffers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Buffers<T>> {
        self.buffers.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `items` to the current-tick data of `producer`.
    ///
    /// Items are moved in.  The order of items within one call, and across
    /// successive calls by the same producer within the same tick, is
    /// preserved; no ordering holds between distinct producers.
    pub fn add(&self, producer: ModelInstanceId, mut items: Vec<T>) {
        let mut buffers = self.write();
        buffers
            .current
            .entry(producer)
            .or_default()
            .append(&mut items);
    }

    /// Snapshot of the current-tick data published by `producer`.
    ///
    /// Empty if the producer has not published this tick — readers cannot
    /// distinguish "absent" from "published nothing".
    pub fn current_from(&self, producer: ModelInstanceId) -> Vec<T> {
        self.read().current.get(&producer).cloned().unwrap_or_default()
    }

    /// Snapshot of the previous-tick data published by `producer`.
    pub fn previous_from(&self, producer: ModelInstanceId) -> Vec<T> {
        self.read().previous.get(&producer).cloned().unwrap_or_default()
    }

    /// End-of-tick epoch swap: what was current becomes previous, and the
    /// current buffer starts empty.
    pub fn swap_epoch(&self) {
        let mut buffers = self.write();
        buffers.previous.clear();
        let Buffers { current, previous } = &mut *buffers;
        mem::swap(current, previous);
    }

    /// Drop all data from both buffers.
    pub fn clear(&self) {
        let mut buffers = self.write();
        buffers.current.clear();
        buffers.previous.clear();
    }
}

impl<T: Payload> Default for InfoStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
