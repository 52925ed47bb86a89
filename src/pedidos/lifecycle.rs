//! Order lifecycle tracking.
//!
//! Orders advance through a fixed six-stage chain, forward only, with
//! no rollback. The current stage is derived from the state-change
//! history; the set of offered next stages is purely advisory, with
//! the backend remaining the authority on whether a transition is
//! accepted.

use std::fmt;
use std::str::FromStr;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// The fulfillment chain in order. `VENTAS` is initial, `ENTREGA`
/// terminal.
pub const ESTADOS_PEDIDO: [Estado; 6] = [
    Estado::Ventas,
    Estado::Cobranzas,
    Estado::Impuestos,
    Estado::Embarque,
    Estado::Logistica,
    Estado::Entrega,
];

/// One stage of the order fulfillment sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Estado {
    Ventas,
    Cobranzas,
    Impuestos,
    Embarque,
    Logistica,
    Entrega,
}

impl Estado {
    fn indice(self) -> usize {
        match self {
            Estado::Ventas => 0,
            Estado::Cobranzas => 1,
            Estado::Impuestos => 2,
            Estado::Embarque => 3,
            Estado::Logistica => 4,
            Estado::Entrega => 5,
        }
    }

    /// Whether this is the terminal stage.
    #[must_use]
    pub fn es_final(self) -> bool {
        self == Estado::Entrega
    }
}

impl fmt::Display for Estado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            Estado::Ventas => "VENTAS",
            Estado::Cobranzas => "COBRANZAS",
            Estado::Impuestos => "IMPUESTOS",
            Estado::Embarque => "EMBARQUE",
            Estado::Logistica => "LOGISTICA",
            Estado::Entrega => "ENTREGA",
        };

        f.write_str(nombre)
    }
}

impl FromStr for Estado {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor.to_ascii_uppercase().as_str() {
            "VENTAS" => Ok(Estado::Ventas),
            "COBRANZAS" => Ok(Estado::Cobranzas),
            "IMPUESTOS" => Ok(Estado::Impuestos),
            "EMBARQUE" => Ok(Estado::Embarque),
            "LOGISTICA" => Ok(Estado::Logistica),
            "ENTREGA" => Ok(Estado::Entrega),
            otro => Err(format!("estado desconocido: {otro}")),
        }
    }
}

/// One record of the append-only state-change log. The sequence is
/// treated as totally ordered by `fecha_cambio` ascending, which
/// matches insertion order as the backend returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstadoCambio {
    #[serde(default)]
    pub id: Option<i64>,
    pub estado: Estado,
    #[serde(default)]
    pub fecha_cambio: Option<DateTime>,
}

/// Current stage of an order: the estado of the last history record,
/// or `VENTAS` when no change has been recorded yet.
#[must_use]
pub fn estado_actual(historial: &[EstadoCambio]) -> Estado {
    historial
        .last()
        .map_or(Estado::Ventas, |cambio| cambio.estado)
}

/// Stages strictly after `actual` in the chain, in order. Empty for
/// the terminal stage.
#[must_use]
pub fn transiciones_disponibles(actual: Estado) -> &'static [Estado] {
    ESTADOS_PEDIDO
        .get(actual.indice() + 1..)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cambio(estado: Estado) -> EstadoCambio {
        EstadoCambio {
            id: None,
            estado,
            fecha_cambio: None,
        }
    }

    #[test]
    fn historial_vacio_es_ventas() {
        assert_eq!(estado_actual(&[]), Estado::Ventas);
    }

    #[test]
    fn estado_actual_es_el_ultimo_registro() {
        let historial = [cambio(Estado::Ventas), cambio(Estado::Cobranzas)];

        assert_eq!(estado_actual(&historial), Estado::Cobranzas);
    }

    #[test]
    fn transiciones_desde_cobranzas() {
        assert_eq!(
            transiciones_disponibles(Estado::Cobranzas),
            &[
                Estado::Impuestos,
                Estado::Embarque,
                Estado::Logistica,
                Estado::Entrega,
            ]
        );
    }

    #[test]
    fn historial_vacio_ofrece_toda_la_cadena_restante() {
        let actual = estado_actual(&[]);

        assert_eq!(
            transiciones_disponibles(actual),
            &[
                Estado::Cobranzas,
                Estado::Impuestos,
                Estado::Embarque,
                Estado::Logistica,
                Estado::Entrega,
            ]
        );
    }

    #[test]
    fn entrega_es_terminal() {
        assert!(Estado::Entrega.es_final());
        assert!(transiciones_disponibles(Estado::Entrega).is_empty());
    }

    #[test]
    fn toda_transicion_es_sufijo_estricto() {
        for (posicion, estado) in ESTADOS_PEDIDO.iter().enumerate() {
            let disponibles = transiciones_disponibles(*estado);

            assert_eq!(disponibles, &ESTADOS_PEDIDO[posicion + 1..]);

            if !estado.es_final() {
                assert!(!disponibles.is_empty(), "{estado} debe ofrecer transiciones");
            }
        }
    }

    #[test]
    fn historial_que_termina_en_entrega() {
        let historial: Vec<EstadoCambio> =
            ESTADOS_PEDIDO.iter().copied().map(cambio).collect();

        assert_eq!(estado_actual(&historial), Estado::Entrega);
        assert!(transiciones_disponibles(estado_actual(&historial)).is_empty());
    }

    #[test]
    fn deserializa_registro_del_historial() {
        let cambio: EstadoCambio = serde_json::from_str(
            r#"{"id":4,"estado":"IMPUESTOS","fechaCambio":"2025-06-01T10:15:30"}"#,
        )
        .unwrap();

        assert_eq!(cambio.estado, Estado::Impuestos);
        assert!(cambio.fecha_cambio.is_some());
    }
}
