//! Session store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no se pudo acceder al archivo de sesión")]
    Io(#[from] std::io::Error),

    #[error("el archivo de sesión está corrupto")]
    Corrupta(#[from] serde_json::Error),
}
