//! `simfab-exchange` — the data-exchange fabric shared by all models in a
//! scenario.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`store`]    | `InfoStore<T>` — per-payload-type double-buffered store   |
//! | [`exchange`] | `Exchange` — one `InfoStore` per payload type, type-erased |
//!
//! # Design notes
//!
//! Models never talk to each other directly.  A producer appends its
//! per-tick output to the *current* buffer of the store for its payload
//! type; consumers read either the current buffer (same-tick data from an
//! earlier tick group) or the *previous* buffer (last tick's data — the
//! mechanism that breaks cyclic dependencies).  At the end of every tick
//! the scenario swaps the buffers in every store: current becomes previous
//! and a fresh empty current begins.
//!
//! Every store has its own shared/exclusive lock and stores for different
//! payload types are strictly independent, so the exchange itself needs no
//! global lock.

pub mod exchange;
pub mod store;


pub use exchange::Exchange;
pub use store::{InfoStore, Payload};
