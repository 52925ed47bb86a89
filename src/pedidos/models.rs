//! Order data models.

use std::fmt;
use std::str::FromStr;

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{clientes::Cliente, pedidos::lifecycle::EstadoCambio, vehiculos::Vehiculo};

/// Payment method selected at order creation. Distinct from the later
/// payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormaPago {
    Contado,
    Transferencia,
    Tarjeta,
}

impl fmt::Display for FormaPago {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            FormaPago::Contado => "CONTADO",
            FormaPago::Transferencia => "TRANSFERENCIA",
            FormaPago::Tarjeta => "TARJETA",
        };

        f.write_str(nombre)
    }
}

impl FromStr for FormaPago {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor.to_ascii_uppercase().as_str() {
            "CONTADO" => Ok(FormaPago::Contado),
            "TRANSFERENCIA" => Ok(FormaPago::Transferencia),
            "TARJETA" => Ok(FormaPago::Tarjeta),
            otro => Err(format!("forma de pago desconocida: {otro}")),
        }
    }
}

/// Entities a nested order reference can point at.
pub trait Identificable {
    fn id(&self) -> i64;
}

impl Identificable for Cliente {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identificable for Vehiculo {
    fn id(&self) -> i64 {
        self.id
    }
}

/// An id-only entity reference as the backend embeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloId {
    pub id: i64,
}

/// A nested entity reference with an explicit resolution state.
///
/// Order listings may embed either the full record or just its id;
/// enrichment upgrades `SoloId` to `Completa` on a best-effort basis,
/// so renderers can show degraded rows deliberately instead of
/// guessing from missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Referencia<T> {
    Completa(T),
    SoloId(SoloId),
}

impl<T: Identificable> Referencia<T> {
    /// The referenced entity's id, resolved or not.
    pub fn id(&self) -> i64 {
        match self {
            Referencia::Completa(entidad) => entidad.id(),
            Referencia::SoloId(referencia) => referencia.id,
        }
    }
}

impl<T> Referencia<T> {
    /// The full record when resolved.
    pub fn completa(&self) -> Option<&T> {
        match self {
            Referencia::Completa(entidad) => Some(entidad),
            Referencia::SoloId(_) => None,
        }
    }
}

/// A customer order: read-mostly projection of backend state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    pub id: i64,
    pub numero_pedido: String,
    #[serde(default)]
    pub cliente: Option<Referencia<Cliente>>,
    #[serde(default)]
    pub vehiculo: Option<Referencia<Vehiculo>>,
    #[serde(default)]
    pub configuracion_extra: Option<String>,
    pub forma_pago: FormaPago,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub fecha_creacion: Option<DateTime>,
    #[serde(default)]
    pub historial: Vec<EstadoCambio>,
}

/// Creation payload: id-only references, the way the backend expects
/// them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevoPedido {
    pub numero_pedido: String,
    pub cliente: SoloId,
    pub vehiculo: SoloId,
    pub configuracion_extra: String,
    pub forma_pago: FormaPago,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referencia_completa_desde_json() {
        let referencia: Referencia<Cliente> = serde_json::from_str(
            r#"{"id":3,"nombre":"Ana","apellido":"Paz","documento":"30111222",
                "email":"ana@mail.com","telefono":"1144455566"}"#,
        )
        .unwrap();

        assert_eq!(referencia.id(), 3);
        assert!(referencia.completa().is_some());
    }

    #[test]
    fn referencia_solo_id_desde_json() {
        let referencia: Referencia<Cliente> = serde_json::from_str(r#"{"id":3}"#).unwrap();

        assert_eq!(referencia.id(), 3);
        assert!(referencia.completa().is_none());
    }

    #[test]
    fn pedido_minimo_desde_json() {
        let pedido: Pedido = serde_json::from_str(
            r#"{"id":10,"numeroPedido":"PED-1750000000000","formaPago":"CONTADO"}"#,
        )
        .unwrap();

        assert_eq!(pedido.numero_pedido, "PED-1750000000000");
        assert!(pedido.cliente.is_none());
        assert!(pedido.historial.is_empty());
        assert_eq!(pedido.total, None);
    }

    #[test]
    fn nuevo_pedido_serializa_referencias_por_id() {
        let nuevo = NuevoPedido {
            numero_pedido: "PED-1".to_string(),
            cliente: SoloId { id: 4 },
            vehiculo: SoloId { id: 9 },
            configuracion_extra: "Llantas de aleación".to_string(),
            forma_pago: FormaPago::Tarjeta,
        };

        let json = serde_json::to_value(&nuevo).unwrap();

        assert_eq!(json["cliente"]["id"], 4);
        assert_eq!(json["vehiculo"]["id"], 9);
        assert_eq!(json["formaPago"], "TARJETA");
    }
}
