//! The model life-cycle state enumeration.
//!
//! A wrapped model starts `Uninitialised`, becomes `Ready` after a
//! successful init, and may only be ticked while `Ready`.  `None` is a
//! sentinel used for conversions and diagnostics only — no wrapper ever
//! holds it.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Runtime state of a model during a simulation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelState {
    /// Unspecified state (conversion/diagnostic sentinel).
    #[default]
    None,
    /// Not yet initialised — cannot be ticked.
    Uninitialised,
    /// Initialised and ready to be ticked.
    Ready,
}

impl ModelState {
    /// Human-readable label, stable across versions.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelState::None          => "none",
            ModelState::Uninitialised => "uninitialised",
            ModelState::Ready         => "ready",
        }
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none"          => Ok(ModelState::None),
            "uninitialised" => Ok(ModelState::Uninitialised),
            "ready"         => Ok(ModelState::Ready),
            _ => Err(CoreError::BadStateName(s.to_owned())),
        }
    }
}

impl From<ModelState> for i64 {
    fn from(ms: ModelState) -> i64 {
        match ms {
            ModelState::None          => 0,
            ModelState::Uninitialised => 1,
            ModelState::Ready         => 2,
        }
    }
}

impl TryFrom<i64> for ModelState {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ModelState::None),
            1 => Ok(ModelState::Uninitialised),
            2 => Ok(ModelState::Ready),
            _ => Err(CoreError::BadStateValue(value)),
        }
    }
}
