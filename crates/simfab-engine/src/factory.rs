//! The `ModelFactory` trait — how a scenario acquires its population.

use std::sync::Arc;

use simfab_exchange::Exchange;
use simfab_model::TickGroupMap;

use crate::ScenarioResult;

/// Builds a scenario's model population and its exchange in one call.
///
/// Implementations decide where entity definitions come from — literals,
/// a file, a generator.  Whatever the origin, `populate` must:
///
/// - create the [`Exchange`] and register a store for every payload type
///   the models will trade,
/// - construct every model, handing each a clone of the shared
///   `Arc<Exchange>`,
/// - wrap each model with its init-data source and place the wrapper into
///   the tick group matching the producer/consumer dependency graph
///   (producers in lower groups than their consumers; cyclic pairs
///   resolved by one side reading the previous epoch),
/// - return the shared exchange so the scenario can drive the epoch.
///
/// The scenario clears `groups` before calling `populate`, so factories
/// always start from an empty map.
pub trait ModelFactory {
    fn populate(&mut self, groups: &mut TickGroupMap) -> ScenarioResult<Arc<Exchange>>;
}
