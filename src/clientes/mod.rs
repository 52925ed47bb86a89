//! Client registry.

mod errors;
mod models;
mod service;

pub use errors::ClientesServiceError;
pub use models::{Cliente, NuevoCliente};
pub use service::*;
