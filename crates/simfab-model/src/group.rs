//! Tick groups — the ordered execution grouping of a scenario's models.
//!
//! A single tick group contains model instances with no direct dependence
//! on each other's current-tick data; they may be ticked in parallel.
//! Groups are keyed by a signed index and executed in strictly ascending
//! order with a barrier between groups, so a model whose inputs come from
//! group *n* belongs in group *n+1* or later.  Cyclic pairs that no
//! ordering can satisfy are resolved by one side reading the previous
//! epoch instead.
//!
//! The model factory for a scenario assigns wrappers to groups.  Group
//! indices are most often assigned per model type — e.g. every sensor
//! model in a group above every platform model it observes — but nothing
//! stops per-instance assignment.

use std::collections::BTreeMap;

use crate::ModelWrapper;

/// The index of a tick group.
pub type TickGroupIndex = i32;

/// A collection of models that may be ticked in parallel.
pub type TickGroup = Vec<ModelWrapper>;

/// Tick groups keyed by index; iteration order is execution order.
pub type TickGroupMap = BTreeMap<TickGroupIndex, TickGroup>;
