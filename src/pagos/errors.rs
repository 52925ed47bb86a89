//! Payment service errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum PagosServiceError {
    #[error("{0}")]
    Validacion(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
