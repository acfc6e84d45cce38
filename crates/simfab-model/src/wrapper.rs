//! `ModelWrapper` — the framework's erased, thread-safe handle over one
//! user model.
//!
//! # Design
//!
//! The scenario engine holds models of arbitrary concrete types, so the
//! wrapper erases them: the concrete model and its bound init source live
//! in a `Box<dyn ErasedModel>` behind a generic constructor, and the
//! engine only ever sees the erased operation set `{model_type_id,
//! model_instance_id, model_state, init, tick}`.
//!
//! The wrapper also owns the life-cycle state machine and the lock that
//! serialises access to the model, so model implementations need no
//! synchronisation of their own.  Observers take the read lock; `init`
//! and `tick` take the write lock for their full duration.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use simfab_core::{ModelInstanceId, ModelState, ModelTypeId, TickIndex};

use crate::{InitDataSource, Model, ModelError, ModelResult};

// ── Trait object ──────────────────────────────────────────────────────────────

/// Type-erased interface over a (model, init source) pair.
trait ErasedModel: Send + Sync {
    fn model_instance_id(&self) -> ModelInstanceId;

    /// Pull the payload from the bound source and initialise the model.
    fn init(&mut self) -> ModelResult<()>;

    fn tick(&mut self, tick: TickIndex) -> ModelResult<()>;
}

/// A model bound to its init-data source.
///
/// The `Data = M::Init` bound is where the framework guarantees, at
/// compile time, that a source can only ever be paired with a model it
/// can initialise.
struct Bound<M, S> {
    model:  M,
    source: S,
}

impl<M, S> ErasedModel for Bound<M, S>
where
    M: Model,
    S: InitDataSource<Data = M::Init>,
{
    fn model_instance_id(&self) -> ModelInstanceId {
        self.model.model_instance_id()
    }

    fn init(&mut self) -> ModelResult<()> {
        self.model.init(self.source.get())
    }

    fn tick(&mut self, tick: TickIndex) -> ModelResult<()> {
        self.model.tick(tick)
    }
}

// ── ModelWrapper ──────────────────────────────────────────────────────────────

/// Guarded state: the erased model pair plus its life-cycle state.
struct Inner {
    model: Box<dyn ErasedModel>,
    state: ModelState,
}

/// Erased, thread-safe handle owning one model and its init source.
pub struct ModelWrapper {
    /// Invariant for the wrapper's lifetime, so readable without the lock.
    type_id: ModelTypeId,
    inner:   RwLock<Inner>,
}

impl ModelWrapper {
    /// Wrap `model` with the `source` that produces its init payload.
    ///
    /// The new wrapper is [`ModelState::Uninitialised`]; it must be
    /// initialised before it can be ticked.
    pub fn new<M, S>(model: M, source: S) -> Self
    where
        M: Model,
        S: InitDataSource<Data = M::Init>,
    {
        Self {
            type_id: M::model_type_id(),
            inner: RwLock::new(Inner {
                model: Box::new(Bound { model, source }),
                state: ModelState::Uninitialised,
            }),
        }
    }

    // The life-cycle state is written before any fallible model call, so a
    // panicking model cannot leave the guarded metadata torn; a poisoned
    // lock is therefore recovered rather than propagated.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The type ID of the underlying model.
    pub fn model_type_id(&self) -> ModelTypeId {
        self.type_id
    }

    /// The instance ID of the underlying model.
    ///
    /// [`ModelInstanceId::UNDEFINED`] until the first successful
    /// [`init`][Self::init].
    pub fn model_instance_id(&self) -> ModelInstanceId {
        self.read().model.model_instance_id()
    }

    /// The current life-cycle state.
    pub fn model_state(&self) -> ModelState {
        self.read().state
    }

    /// Initialise (or re-initialise) the model from its init source.
    ///
    /// On success the state becomes [`ModelState::Ready`].  On failure the
    /// error propagates and the state is [`ModelState::Uninitialised`] —
    /// including a failed re-init, since a partially re-initialised model
    /// must not be tickable.
    pub fn init(&self) -> ModelResult<()> {
        let mut inner = self.write();

        inner.state = ModelState::Uninitialised;
        inner.model.init()?;

        if !inner.model.model_instance_id().is_defined() {
            return Err(ModelError::UndefinedInstance { type_id: self.type_id });
        }

        inner.state = ModelState::Ready;
        Ok(())
    }

    /// Tick the underlying model.
    ///
    /// Only a [`ModelState::Ready`] model may be ticked.  A tick failure
    /// propagates but leaves the model `Ready`; whether the scenario
    /// retries the same tick index is the caller's decision.
    pub fn tick(&self, tick: TickIndex) -> ModelResult<()> {
        let mut inner = self.write();

        if inner.state != ModelState::Ready {
            return Err(ModelError::NotReady {
                type_id: self.type_id,
                state:   inner.state,
            });
        }

        inner.model.tick(tick)
    }
}
