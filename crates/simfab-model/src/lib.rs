//! `simfab-model` — the model contract and the framework's handle over
//! user models.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`model`]   | `Model` trait — the main extension point for user code    |
//! | [`source`]  | `InitDataSource` trait — typed init-payload producer      |
//! | [`wrapper`] | `ModelWrapper` — erased, lock-guarded life-cycle handle   |
//! | [`group`]   | `TickGroup`, `TickGroupMap` — ordered execution grouping  |
//! | [`error`]   | `ModelError`, `ModelResult`                               |
//!
//! # Life-cycle
//!
//! A wrapped model moves through a small state machine that the wrapper —
//! not the model — enforces:
//!
//! ```text
//!         init Ok
//! Uninitialised ───────▶ Ready ─┐
//!   ▲     ▲                     │ tick (any number)
//!   │     │ init Err            │
//!   │     └─────────────────────┘
//!   └── re-init is permitted from Ready and is equivalent to a fresh init
//! ```
//!
//! Construction is deliberately trivial; all real setup happens in `init`,
//! which pulls the typed payload from the model's bound `InitDataSource`.
//! Repeated initialisation with the same payload must yield the same
//! observable state, so a scenario can be re-run from scratch without
//! rebuilding its population.

pub mod error;
pub mod group;
pub mod model;
pub mod source;
pub mod wrapper;


pub use error::{ModelError, ModelResult};
pub use group::{TickGroup, TickGroupIndex, TickGroupMap};
pub use model::Model;
pub use source::InitDataSource;
pub use wrapper::ModelWrapper;
