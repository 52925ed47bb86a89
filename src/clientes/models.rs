//! Client data models.

use serde::{Deserialize, Serialize};

/// A registered customer of the dealership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub documento: String,
    pub email: String,
    pub telefono: String,
}

/// Creation payload for a customer record.
#[derive(Debug, Clone, Serialize)]
pub struct NuevoCliente {
    pub nombre: String,
    pub apellido: String,
    pub documento: String,
    pub email: String,
    pub telefono: String,
}
