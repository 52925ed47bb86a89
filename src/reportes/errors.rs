//! Reporting service errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ReportesServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
