//! `simfab-engine` — the scenario tick engine.
//!
//! # Scenario flow
//!
//! ```text
//! let pool = build_pool(None)?;                 // shared worker pool
//! let scenario = Scenario::new(pool);
//! scenario.populate_from(&mut factory)?;        // factory builds models + exchange
//! scenario.init()?;                             // parallel init, clear exchange, tick = 0
//! for _ in 0..n {
//!     scenario.tick()?;                         // groups in order, parallel inside
//! }
//! ```
//!
//! # One tick
//!
//! ```text
//! ① For each tick group, ascending index order:
//!      dispatch every wrapper's tick to the pool  (parallel fan-out)
//!      join all tasks                             (barrier; first error surfaces
//!                                                  only after every sibling joined)
//! ② Release the tick-group map lock.
//! ③ Swap the exchange epoch                       (this tick's output becomes
//!                                                  the previous epoch)
//! ④ Increment next_tick_index.
//! ```
//!
//! A failed tick performs neither ③ nor ④: the failing tick index remains
//! the next to run.
//!
//! # Crate layout
//!
//! | Module       | Contents                                    |
//! |--------------|---------------------------------------------|
//! | [`scenario`] | `Scenario` — populate / init / tick engine  |
//! | [`factory`]  | `ModelFactory` trait                        |
//! | [`pool`]     | `build_pool` — shared Rayon pool helper     |
//! | [`error`]    | `ScenarioError`, `ScenarioResult`           |

pub mod error;
pub mod factory;
pub mod pool;
pub mod scenario;


pub use error::{ScenarioError, ScenarioResult};
pub use factory::ModelFactory;
pub use pool::build_pool;
pub use scenario::Scenario;
