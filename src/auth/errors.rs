//! Auth service errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
