//! `simfab-core` — foundational types for the simfab simulation framework.
//!
//! This crate is a dependency of every other `simfab-*` crate.  It
//! intentionally has no `simfab-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `ModelTypeId`, `ModelInstanceId`                        |
//! | [`time`]  | `TickIndex`, `SimClock`                                 |
//! | [`state`] | `ModelState` and its string/integer conversions         |
//! | [`error`] | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ModelInstanceId, ModelTypeId};
pub use state::ModelState;
pub use time::{SimClock, TickIndex};
