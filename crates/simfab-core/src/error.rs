//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, keeping error sites clean along the crate
//! dependency chain.

use thiserror::Error;

/// The top-level error type for `simfab-core` and a common base for the
/// other `simfab-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0:?} is not a model state")]
    BadStateName(String),

    #[error("{0} is not a model state value")]
    BadStateValue(i64),
}

/// Shorthand result type for all `simfab-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
