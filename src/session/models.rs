//! Session data models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role governing route and row-level visibility.
///
/// The backend may answer with a role this build does not know;
/// such identities keep a session but only reach the entry route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rol {
    Admin,
    Vendedor,
    Cliente,
    #[serde(other)]
    Desconocido,
}

impl fmt::Display for Rol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            Rol::Admin => "ADMIN",
            Rol::Vendedor => "VENDEDOR",
            Rol::Cliente => "CLIENTE",
            Rol::Desconocido => "DESCONOCIDO",
        };

        f.write_str(nombre)
    }
}

impl FromStr for Rol {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor.to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Rol::Admin),
            "VENDEDOR" => Ok(Rol::Vendedor),
            "CLIENTE" => Ok(Rol::Cliente),
            otro => Err(format!("rol desconocido: {otro}")),
        }
    }
}

/// Authenticated identity returned by login/registration and held for
/// the session lifetime. Distinct from [`crate::clientes::Cliente`];
/// `cliente_id` is the explicit link when the backend provides one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identidad {
    pub username: String,
    pub role: Rol,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cliente_id: Option<i64>,
}
