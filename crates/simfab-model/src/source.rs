//! The `InitDataSource` trait — typed init-payload producer.

/// Produces the initialisation payload for exactly one model instance.
///
/// A source is bound one-to-one with a model when the pair is handed to
/// [`ModelWrapper::new`][crate::ModelWrapper::new]; the binding is where
/// the payload types are forced to match at compile time.  Where the
/// payload comes from is the source's business — a literal captured at
/// construction, a row from an entity-definition file, a generated value.
///
/// Because a model may be re-initialised, `get` may be called more than
/// once; each call must return the same payload so that re-init reproduces
/// the same observable model state (in particular, the same instance ID).
pub trait InitDataSource: Send + Sync + 'static {
    /// The payload type this source produces.
    type Data: Send;

    /// Produce the init payload for the bound model.
    fn get(&mut self) -> Self::Data;
}
