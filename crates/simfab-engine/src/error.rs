use simfab_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario has no model population; call populate_from first")]
    NotPopulated,

    #[error("scenario has not been initialised for ticking; call init first")]
    NotInitialised,

    #[error("model factory error: {0}")]
    Factory(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("worker pool could not be built: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
