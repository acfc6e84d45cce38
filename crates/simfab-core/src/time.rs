//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `TickIndex` counter.
//! Simulation time is a pure index: the framework never touches a wall
//! clock.  The mapping to simulated seconds is held in `SimClock`:
//!
//!   sim_time_secs = tick * secs_per_tick
//!
//! `TickIndex` is signed because the value `-1` marks a scenario that has
//! been populated but not yet initialised for ticking.  Tick `0` is the
//! first time step executed after initialisation.

use std::fmt;

// ── TickIndex ─────────────────────────────────────────────────────────────────

/// The index of a simulation time step.
///
/// `-1` denotes "not yet initialised"; `0` is the first tick to run after
/// initialisation; the counter increases by exactly one per successful tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickIndex(pub i64);

impl TickIndex {
    /// A scenario that has not been initialised for ticking.
    pub const UNINITIALISED: TickIndex = TickIndex(-1);

    /// The first tick after initialisation.
    pub const ZERO: TickIndex = TickIndex(0);

    /// `true` once initialisation has set the counter to a runnable index.
    #[inline]
    pub fn is_runnable(self) -> bool {
        self.0 >= 0
    }

    /// The tick following this one.
    #[inline]
    pub fn next(self) -> TickIndex {
        TickIndex(self.0 + 1)
    }
}

impl Default for TickIndex {
    /// A fresh counter starts uninitialised, not at zero.
    fn default() -> Self {
        TickIndex::UNINITIALISED
    }
}

impl std::ops::Add<i64> for TickIndex {
    type Output = TickIndex;
    #[inline]
    fn add(self, rhs: i64) -> TickIndex {
        TickIndex(self.0 + rhs)
    }
}

impl fmt::Display for TickIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts tick counts to elapsed simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.  The
/// default rate is one simulated second per tick; models that publish
/// simulation time multiply the tick index by `secs_per_tick`.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// How many simulated seconds one tick represents.
    pub secs_per_tick: f64,
}

impl SimClock {
    /// Create a clock with the given seconds-per-tick rate.
    pub fn new(secs_per_tick: f64) -> Self {
        Self { secs_per_tick }
    }

    /// Elapsed simulated seconds at the start of `tick`.
    ///
    /// An uninitialised tick index maps to `0.0` rather than a negative
    /// duration.
    #[inline]
    pub fn elapsed_secs(&self, tick: TickIndex) -> f64 {
        tick.0.max(0) as f64 * self.secs_per_tick
    }
}

impl Default for SimClock {
    /// One simulated second per tick.
    fn default() -> Self {
        Self { secs_per_tick: 1.0 }
    }
}
