//! The `Model` trait — the main extension point for user code.

use simfab_core::{ModelInstanceId, ModelTypeId, TickIndex};

use crate::ModelResult;

/// One simulated entity.
///
/// Implement this trait to define what an entity does each time step.  A
/// model is constructed trivially (usually by a model factory, which hands
/// it a shared reference to the scenario's `Exchange`), then initialised
/// with a typed payload, then ticked repeatedly.
///
/// # Contract
///
/// - [`model_type_id`][Self::model_type_id] is a non-zero constant, unique
///   per concrete model type.
/// - [`init`][Self::init] must fully initialise internal state, including
///   the instance ID carried in the payload.  It must be repeatable:
///   initialising twice with the same payload yields the same observable
///   state, and the instance ID never changes across re-inits of the same
///   logical instance.  After a successful `init` the instance ID is
///   non-zero.
/// - [`tick`][Self::tick] advances one time step: read inputs from the
///   exchange stores, update internal state, publish outputs.  Inputs from
///   models in *earlier* tick groups are read from the current epoch;
///   closing a dependency cycle requires reading the previous epoch
///   instead.
///
/// # Thread safety
///
/// The scenario ticks the models of one group in parallel on a thread
/// pool, so implementations must be `Send + Sync`.  The wrapper serialises
/// all calls on a single model instance behind its own lock; a model never
/// sees concurrent calls to its own methods.
///
/// # Example
///
/// ```rust,ignore
/// struct Thermometer {
///     instance_id: ModelInstanceId,
///     exchange: Arc<Exchange>,
/// }
///
/// impl Model for Thermometer {
///     type Init = ThermometerInit;
///
///     fn model_type_id() -> ModelTypeId { ModelTypeId(4) }
///
///     fn model_instance_id(&self) -> ModelInstanceId { self.instance_id }
///
///     fn init(&mut self, data: ThermometerInit) -> ModelResult<()> {
///         self.instance_id = data.instance_id;
///         Ok(())
///     }
///
///     fn tick(&mut self, tick: TickIndex) -> ModelResult<()> {
///         if let Some(store) = self.exchange.store::<Reading>() {
///             store.add(self.instance_id, vec![self.sample(tick)]);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Model: Send + Sync + 'static {
    /// The payload type this model is initialised with.
    type Init: Send;

    /// The non-zero constant identifying this model type.
    fn model_type_id() -> ModelTypeId
    where
        Self: Sized;

    /// The instance ID assigned during initialisation.
    ///
    /// [`ModelInstanceId::UNDEFINED`] until `init` has succeeded at least
    /// once; stable thereafter.
    fn model_instance_id(&self) -> ModelInstanceId;

    /// Initialise (or re-initialise) internal state from `data`.
    fn init(&mut self, data: Self::Init) -> ModelResult<()>;

    /// Advance one time step.
    fn tick(&mut self, tick: TickIndex) -> ModelResult<()>;
}
