//! Row-level visibility filters.
//!
//! A second, independent layer applied inside data-bearing views:
//! vehicles already linked to any order are hidden from VENDEDOR and
//! CLIENTE, and CLIENTE only sees orders linked to their own customer
//! record.

use rustc_hash::FxHashSet;

use crate::{
    pedidos::Pedido,
    session::{Identidad, Rol},
    vehiculos::Vehiculo,
};

/// Ids of vehicles referenced by any fetched order.
#[must_use]
pub fn ids_vehiculos_vendidos(pedidos: &[Pedido]) -> FxHashSet<i64> {
    pedidos
        .iter()
        .filter_map(|pedido| pedido.vehiculo.as_ref())
        .map(|referencia| referencia.id())
        .collect()
}

/// Catalog rows a role may see: ADMIN sees everything, VENDEDOR and
/// CLIENTE only vehicles not yet linked to an order.
#[must_use]
pub fn vehiculos_visibles(
    rol: Rol,
    vehiculos: Vec<Vehiculo>,
    vendidos: &FxHashSet<i64>,
) -> Vec<Vehiculo> {
    match rol {
        Rol::Vendedor | Rol::Cliente => vehiculos
            .into_iter()
            .filter(|vehiculo| !vendidos.contains(&vehiculo.id))
            .collect(),
        Rol::Admin | Rol::Desconocido => vehiculos,
    }
}

/// Orders an identity may see. Non-CLIENTE roles see every order; a
/// CLIENTE only their own, matched by the explicit customer link when
/// the backend provided one and by email otherwise.
#[must_use]
pub fn pedidos_visibles(identidad: &Identidad, pedidos: Vec<Pedido>) -> Vec<Pedido> {
    if identidad.role != Rol::Cliente {
        return pedidos;
    }

    pedidos
        .into_iter()
        .filter(|pedido| es_pedido_propio(identidad, pedido))
        .collect()
}

fn es_pedido_propio(identidad: &Identidad, pedido: &Pedido) -> bool {
    let Some(cliente) = &pedido.cliente else {
        return false;
    };

    if let Some(cliente_id) = identidad.cliente_id {
        return cliente.id() == cliente_id;
    }

    cliente
        .completa()
        .zip(identidad.email.as_deref())
        .is_some_and(|(cliente, email)| cliente.email == email)
}
