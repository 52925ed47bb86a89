//! Orders: models, lifecycle tracking and services.

mod errors;
pub mod lifecycle;
mod models;
pub mod seleccion;
mod service;

pub use errors::PedidosServiceError;
pub use lifecycle::{ESTADOS_PEDIDO, Estado, EstadoCambio, estado_actual, transiciones_disponibles};
pub use models::{FormaPago, Identificable, NuevoPedido, Pedido, Referencia, SoloId};
pub use service::*;
