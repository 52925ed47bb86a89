//! Vehicle catalog.

mod errors;
mod models;
mod service;

pub use errors::VehiculosServiceError;
pub use models::{NuevoVehiculo, TipoVehiculo, Vehiculo};
pub use service::*;
