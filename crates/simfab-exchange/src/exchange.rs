//! The `Exchange` — one `InfoStore` per payload type, looked up by type.
//!
//! # Design
//!
//! A scenario does not know the set of payload types its models exchange;
//! that set is fixed when the model factory builds the exchange.  Each
//! store is therefore kept as a `Box<dyn ErasedStore>` in a
//! `HashMap<TypeId, …>`: the scenario drives every store through the
//! erased `clear`/`swap_epoch` interface, while models recover their typed
//! `InfoStore<T>` with a downcast keyed on `TypeId::of::<T>()`.
//!
//! # Thread safety
//!
//! The map itself is immutable after construction (registration happens
//! before the exchange is shared), so no exchange-level lock exists.  All
//! synchronisation is per-store.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::store::{InfoStore, Payload};

// ── Trait object ──────────────────────────────────────────────────────────────

/// Type-erased interface over one `InfoStore<T>`: the operations the
/// scenario engine applies uniformly across all stores.
trait ErasedStore: Send + Sync {
    /// Drop all data from both buffers.
    fn clear(&self);

    /// End-of-tick epoch swap.
    fn swap_epoch(&self);

    fn as_any(&self) -> &dyn Any;
}

impl<T: Payload> ErasedStore for InfoStore<T> {
    fn clear(&self) {
        InfoStore::clear(self);
    }

    fn swap_epoch(&self) {
        InfoStore::swap_epoch(self);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ── Exchange ──────────────────────────────────────────────────────────────────

/// The central exchange of data between models in a scenario: one
/// [`InfoStore`] per payload type.
///
/// Built by the model factory, which registers every payload type its
/// models exchange and then shares the exchange (as `Arc<Exchange>`) with
/// each model it creates and with the scenario.  Registering the same type
/// twice is a no-op — exactly one store per type ever exists.
#[derive(Default)]
pub struct Exchange {
    stores: HashMap<TypeId, Box<dyn ErasedStore>>,
}

impl Exchange {
    pub fn new() -> Self {
        Self { stores: HashMap::new() }
    }

    /// Register an empty store for payload type `T`.
    ///
    /// Calling this twice for the same `T` is a no-op — existing data is
    /// not disturbed.
    pub fn register<T: Payload>(&mut self) {
        self.stores
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(InfoStore::<T>::new()));
    }

    /// The store for payload type `T`, or `None` if `T` was never
    /// registered.
    pub fn store<T: Payload>(&self) -> Option<&InfoStore<T>> {
        self.stores
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<InfoStore<T>>())
    }

    /// `true` if a store for payload type `T` exists.
    pub fn contains<T: Payload>(&self) -> bool {
        self.stores.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered payload types.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    // ── Erased whole-exchange operations ──────────────────────────────────

    /// Clear every store, sequentially.
    pub fn clear(&self) {
        for store in self.stores.values() {
            store.clear();
        }
    }

    /// Clear every store, one pool task per store, joining before return.
    pub fn clear_parallel(&self, pool: &ThreadPool) {
        pool.install(|| {
            self.stores.par_iter().for_each(|(_, store)| store.clear());
        });
    }

    /// Swap epochs in every store, sequentially.
    pub fn swap_epoch(&self) {
        for store in self.stores.values() {
            store.swap_epoch();
        }
    }

    /// Swap epochs in every store in parallel, joining before return.
    ///
    /// This is the end-of-tick epoch boundary: once it returns, this
    /// tick's production is the *previous* epoch the next tick reads.
    pub fn swap_epoch_parallel(&self, pool: &ThreadPool) {
        pool.install(|| {
            self.stores.par_iter().for_each(|(_, store)| store.swap_epoch());
        });
    }
}
