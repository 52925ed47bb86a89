//! Gateway errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures a backend call can surface.
///
/// Every variant renders to a single displayable message; callers do
/// not branch on structure beyond that today.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("error de red: {0}")]
    Red(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status. The message is the
    /// parsed `message` field of the error body when present, or a
    /// per-operation fallback otherwise.
    #[error("{message}")]
    Backend {
        status: StatusCode,
        message: String,
    },

    /// A 2xx response body could not be decoded as the expected JSON.
    #[error("respuesta inválida del servidor: {0}")]
    Parse(#[source] serde_json::Error),
}
