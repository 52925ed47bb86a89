//! Payment capture.

mod errors;
mod models;
mod service;

pub use errors::PagosServiceError;
pub use models::{NuevoPago, Pago};
pub use service::*;
