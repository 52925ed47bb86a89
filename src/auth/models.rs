//! Auth request payloads.

use serde::Serialize;

use crate::session::Rol;

/// Login payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credenciales {
    pub username: String,
    pub password: String,
}

/// Registration payload: the account plus the customer record fields
/// that seed the linked Cliente.
#[derive(Debug, Clone, Serialize)]
pub struct Registro {
    pub username: String,
    pub password: String,
    pub role: Rol,
    pub nombre: String,
    pub apellido: String,
    pub documento: String,
    pub email: String,
    pub telefono: String,
}
