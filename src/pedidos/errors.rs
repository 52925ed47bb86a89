//! Order service errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum PedidosServiceError {
    #[error("Debe seleccionar un estado")]
    EstadoNoSeleccionado,

    #[error(transparent)]
    Api(#[from] ApiError),
}
