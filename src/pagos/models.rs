//! Payment data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recorded payment as the backend returns it. Fields beyond the
/// variant discriminator are populated only for the matching variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pago {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub tipo_pago: Option<String>,
    #[serde(default)]
    pub descuento: Option<Decimal>,
    #[serde(default)]
    pub banco: Option<String>,
    #[serde(default)]
    pub cbu: Option<String>,
    #[serde(default)]
    pub numero_tarjeta: Option<String>,
    #[serde(default)]
    pub titular: Option<String>,
    #[serde(default)]
    pub fecha_expiracion: Option<String>,
}

impl Pago {
    /// Last four digits of the card number, for display.
    #[must_use]
    pub fn tarjeta_enmascarada(&self) -> Option<String> {
        let numero = self.numero_tarjeta.as_deref()?;
        let cola: String = numero
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        Some(format!("***{cola}"))
    }
}

/// Creation payload, one variant per capture endpoint. Serializes to
/// the body shape that variant's endpoint expects.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum NuevoPago {
    #[serde(rename_all = "camelCase")]
    Contado { descuento: Decimal },
    #[serde(rename_all = "camelCase")]
    Transferencia { banco: String, cbu: String },
    #[serde(rename_all = "camelCase")]
    Tarjeta {
        numero_tarjeta: String,
        titular: String,
        fecha_expiracion: String,
        cvv: String,
    },
}

impl NuevoPago {
    /// Path segment of the capture endpoint for this variant.
    #[must_use]
    pub fn segmento(&self) -> &'static str {
        match self {
            NuevoPago::Contado { .. } => "contado",
            NuevoPago::Transferencia { .. } => "transferencia",
            NuevoPago::Tarjeta { .. } => "tarjeta",
        }
    }

    /// Client-side checks mirroring the capture form: discount within
    /// [0, 100], variant fields present.
    ///
    /// # Errors
    ///
    /// Returns the message to display on the first failed check.
    pub fn validar(&self) -> Result<(), String> {
        match self {
            NuevoPago::Contado { descuento } => {
                if *descuento < Decimal::ZERO || *descuento > Decimal::from(100) {
                    return Err("El descuento debe estar entre 0 y 100".to_string());
                }
            }
            NuevoPago::Transferencia { banco, cbu } => {
                if banco.trim().is_empty() || cbu.trim().is_empty() {
                    return Err("Banco y CBU son obligatorios".to_string());
                }
            }
            NuevoPago::Tarjeta {
                numero_tarjeta,
                titular,
                fecha_expiracion,
                cvv,
            } => {
                let campos = [numero_tarjeta, titular, fecha_expiracion, cvv];

                if campos.iter().any(|campo| campo.trim().is_empty()) {
                    return Err("Todos los datos de la tarjeta son obligatorios".to_string());
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contado_serializa_solo_descuento() {
        let pago = NuevoPago::Contado {
            descuento: Decimal::new(105, 1),
        };

        let json = serde_json::to_value(&pago).unwrap();

        assert_eq!(json, serde_json::json!({ "descuento": 10.5 }));
        assert_eq!(pago.segmento(), "contado");
    }

    #[test]
    fn tarjeta_serializa_nombres_camel_case() {
        let pago = NuevoPago::Tarjeta {
            numero_tarjeta: "4111111111111111".to_string(),
            titular: "Ana Paz".to_string(),
            fecha_expiracion: "12/27".to_string(),
            cvv: "123".to_string(),
        };

        let json = serde_json::to_value(&pago).unwrap();

        assert_eq!(json["numeroTarjeta"], "4111111111111111");
        assert_eq!(json["fechaExpiracion"], "12/27");
        assert_eq!(pago.segmento(), "tarjeta");
    }

    #[test]
    fn descuento_fuera_de_rango_se_rechaza() {
        let pago = NuevoPago::Contado {
            descuento: Decimal::from(101),
        };

        assert!(pago.validar().is_err());

        let pago = NuevoPago::Contado {
            descuento: Decimal::from(-1),
        };

        assert!(pago.validar().is_err());
    }

    #[test]
    fn descuento_en_los_limites_es_valido() {
        for descuento in [Decimal::ZERO, Decimal::from(100)] {
            let pago = NuevoPago::Contado { descuento };

            assert!(pago.validar().is_ok());
        }
    }

    #[test]
    fn transferencia_requiere_banco_y_cbu() {
        let pago = NuevoPago::Transferencia {
            banco: "Banco Santander".to_string(),
            cbu: String::new(),
        };

        assert!(pago.validar().is_err());
    }

    #[test]
    fn tarjeta_enmascarada_muestra_los_ultimos_cuatro() {
        let pago = Pago {
            id: Some(1),
            tipo_pago: Some("TARJETA".to_string()),
            descuento: None,
            banco: None,
            cbu: None,
            numero_tarjeta: Some("4111111111111234".to_string()),
            titular: None,
            fecha_expiracion: None,
        };

        assert_eq!(pago.tarjeta_enmascarada().as_deref(), Some("***1234"));
    }
}
