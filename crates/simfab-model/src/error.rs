use simfab_core::{CoreError, ModelState, ModelTypeId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model {type_id} is {state}, not ready to tick")]
    NotReady {
        type_id: ModelTypeId,
        state:   ModelState,
    },

    #[error("init of model {type_id} left the instance id undefined")]
    UndefinedInstance { type_id: ModelTypeId },

    /// Failure raised by a user model's `init` or `tick`.
    #[error("model failure: {0}")]
    Model(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ModelResult<T> = Result<T, ModelError>;
