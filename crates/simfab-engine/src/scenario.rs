//! The `Scenario` struct — one simulation "world" and its tick loop.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::{debug, trace};

use simfab_core::TickIndex;
use simfab_exchange::Exchange;
use simfab_model::{ModelResult, ModelWrapper, TickGroupMap};

use crate::{ModelFactory, ScenarioError, ScenarioResult};

/// State guarded by the scenario's map lock: the tick groups and the
/// exchange the factory built alongside them.
///
/// Each wrapper and each exchange store carries its own lock; this lock is
/// for the collections only.  Lock order is always scenario map → wrapper
/// → store, never the reverse.
#[derive(Default)]
struct Population {
    groups:   TickGroupMap,
    exchange: Option<Arc<Exchange>>,
}

/// A collection of models plus the machinery to advance them through
/// simulation time.
///
/// A scenario is created empty and bound to a worker pool, populated once
/// from a [`ModelFactory`], initialised, and then ticked repeatedly.
/// Changing the population means repopulating (which requires a fresh
/// `init`).  All operations are thread-safe; observers remain callable
/// while a tick is in flight.
pub struct Scenario {
    population: RwLock<Population>,

    /// Worker pool shared by reference; the scenario only submits tasks.
    pool: Arc<ThreadPool>,

    /// Index of the next tick to execute.  `-1` until `init` completes.
    ///
    /// Updated at the *end* of `tick`, so while a tick is in flight this
    /// reads as the index of the tick in progress.
    next_tick: AtomicI64,
}

impl Scenario {
    /// Create an empty scenario running on `pool`.
    pub fn new(pool: Arc<ThreadPool>) -> Self {
        Self {
            population: RwLock::new(Population::default()),
            pool,
            next_tick: AtomicI64::new(TickIndex::UNINITIALISED.0),
        }
    }

    // The guarded collections are never left mid-edit across a fallible
    // call, so a poisoned lock is recovered rather than propagated.
    fn read(&self) -> RwLockReadGuard<'_, Population> {
        self.population.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Population> {
        self.population.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Observers ─────────────────────────────────────────────────────────

    /// Total number of model instances (entities) across all tick groups.
    pub fn entities_size(&self) -> usize {
        self.read().groups.values().map(Vec::len).sum()
    }

    /// Number of tick groups.
    pub fn tick_groups_size(&self) -> usize {
        self.read().groups.len()
    }

    /// The index of the next tick to execute.
    ///
    /// Readable concurrently with `tick`; during a tick this is the index
    /// of the tick in progress.
    pub fn next_tick_index(&self) -> TickIndex {
        TickIndex(self.next_tick.load(Ordering::SeqCst))
    }

    // ── Populate ──────────────────────────────────────────────────────────

    /// Replace the population and exchange with those built by `factory`.
    ///
    /// Any previous population is discarded first.  A freshly populated
    /// scenario is not yet runnable: `next_tick_index` is reset to `-1`
    /// and [`init`][Self::init] must be called before ticking.
    pub fn populate_from<F: ModelFactory>(&self, factory: &mut F) -> ScenarioResult<()> {
        let mut population = self.write();

        population.groups.clear();
        population.exchange = None;
        self.next_tick
            .store(TickIndex::UNINITIALISED.0, Ordering::SeqCst);

        population.exchange = Some(factory.populate(&mut population.groups)?);

        debug!(
            entities = population.groups.values().map(Vec::len).sum::<usize>(),
            tick_groups = population.groups.len(),
            "scenario populated"
        );
        Ok(())
    }

    // ── Init ──────────────────────────────────────────────────────────────

    /// Initialise every model (in parallel), clear the exchange, and set
    /// the next tick index to `0`.
    ///
    /// All init tasks are joined before the first error is surfaced, so no
    /// task outlives this call.  On failure the scenario is left
    /// non-runnable (`next_tick_index == -1`); models that completed
    /// before the failure keep their `Ready` state.
    pub fn init(&self) -> ScenarioResult<()> {
        let population = self.write();
        let exchange = population
            .exchange
            .as_ref()
            .cloned()
            .ok_or(ScenarioError::NotPopulated)?;

        // A failed re-init must not leave a stale runnable index behind.
        self.next_tick
            .store(TickIndex::UNINITIALISED.0, Ordering::SeqCst);

        let wrappers: Vec<&ModelWrapper> = population.groups.values().flatten().collect();
        debug!(entities = wrappers.len(), "initialising scenario");

        let results: Vec<ModelResult<()>> = self
            .pool
            .install(|| wrappers.par_iter().map(|w| w.init()).collect());
        for result in results {
            result?;
        }

        exchange.clear_parallel(&self.pool);
        self.next_tick.store(TickIndex::ZERO.0, Ordering::SeqCst);
        debug!("scenario initialised");
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Execute a single time step.
    ///
    /// Tick groups run in ascending index order; the models within a group
    /// run in parallel on the pool, with a barrier before the next group
    /// begins.  After the last group the exchange epoch is swapped (this
    /// tick's production becomes the previous epoch) and the tick index is
    /// incremented.
    ///
    /// A failing model tick aborts the call after its group's barrier: the
    /// epoch is not swapped and `next_tick_index` is unchanged, so the
    /// failed index remains the next to run.
    pub fn tick(&self) -> ScenarioResult<()> {
        let (tick, exchange) = {
            let population = self.write();

            // Read the counter under the map lock so concurrent tick calls
            // serialise onto distinct indices.
            let tick = self.next_tick_index();
            if !tick.is_runnable() {
                return Err(ScenarioError::NotInitialised);
            }

            let exchange = population
                .exchange
                .as_ref()
                .cloned()
                .ok_or(ScenarioError::NotPopulated)?;

            for (index, group) in &population.groups {
                trace!(%tick, group = index, entities = group.len(), "ticking group");
                let results: Vec<ModelResult<()>> = self
                    .pool
                    .install(|| group.par_iter().map(|w| w.tick(tick)).collect());
                for result in results {
                    result?;
                }
            }

            (tick, exchange)
            // Map lock released here; the epoch swap only needs the
            // per-store locks, and the counter update must not block
            // concurrent observers.
        };

        exchange.swap_epoch_parallel(&self.pool);
        self.next_tick.fetch_add(1, Ordering::SeqCst);
        trace!(%tick, "tick complete");
        Ok(())
    }
}
