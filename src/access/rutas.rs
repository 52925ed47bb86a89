//! Navigation targets and the authorization decision.

use std::fmt;

use crate::session::{Identidad, Rol};

/// Navigation targets of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ruta {
    Inicio,
    Clientes,
    Vehiculos,
    Pedidos,
    Pagos,
    Reportes,
}

impl fmt::Display for Ruta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            Ruta::Inicio => "Inicio",
            Ruta::Clientes => "Clientes",
            Ruta::Vehiculos => "Vehículos",
            Ruta::Pedidos => "Pedidos",
            Ruta::Pagos => "Pagos",
            Ruta::Reportes => "Reportes",
        };

        f.write_str(nombre)
    }
}

/// Routes a role may navigate to. Static and deterministic; an
/// unrecognized role only reaches the entry route.
#[must_use]
pub fn rutas_permitidas(rol: Rol) -> &'static [Ruta] {
    match rol {
        Rol::Admin => &[
            Ruta::Inicio,
            Ruta::Clientes,
            Ruta::Vehiculos,
            Ruta::Pedidos,
            Ruta::Pagos,
            Ruta::Reportes,
        ],
        Rol::Vendedor => &[Ruta::Inicio, Ruta::Vehiculos],
        Rol::Cliente => &[Ruta::Inicio, Ruta::Vehiculos, Ruta::Pedidos],
        Rol::Desconocido => &[Ruta::Inicio],
    }
}

/// Roles a route demands. An empty list means any authenticated
/// identity may enter.
#[must_use]
pub fn roles_requeridos(ruta: Ruta) -> &'static [Rol] {
    match ruta {
        Ruta::Inicio => &[],
        Ruta::Clientes | Ruta::Pagos | Ruta::Reportes => &[Rol::Admin],
        Ruta::Vehiculos => &[Rol::Admin, Rol::Vendedor, Rol::Cliente],
        Ruta::Pedidos => &[Rol::Admin, Rol::Cliente],
    }
}

/// Outcome of gating a route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Permitir,
    /// No identity at all: silently send the user to the entry route.
    RedirigirAlIngreso,
    /// Authenticated but not authorized: show an access-denied message
    /// naming the user's actual role.
    Denegar {
        rol: Rol,
    },
}

/// Gate a route request: deny without identity unconditionally; with
/// an identity, deny exactly when the requirement list is non-empty
/// and does not contain the identity's role.
#[must_use]
pub fn autorizar(identidad: Option<&Identidad>, requeridos: &[Rol]) -> Decision {
    let Some(identidad) = identidad else {
        return Decision::RedirigirAlIngreso;
    };

    if !requeridos.is_empty() && !requeridos.contains(&identidad.role) {
        return Decision::Denegar {
            rol: identidad.role,
        };
    }

    Decision::Permitir
}
