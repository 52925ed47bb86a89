//! Authentication against the backend.

mod errors;
mod models;
mod service;

pub use errors::AuthServiceError;
pub use models::{Credenciales, Registro};
pub use service::*;
