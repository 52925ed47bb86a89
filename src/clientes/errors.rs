//! Client service errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ClientesServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
