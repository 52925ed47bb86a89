//! Vehicle data models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vehicle category. The applicable tax rate is a pure function of
/// this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TipoVehiculo {
    Auto,
    Camioneta,
    Moto,
    Camion,
}

impl TipoVehiculo {
    /// Display-only tax rate. The authoritative amount is the
    /// backend-computed `total` on a Pedido.
    #[must_use]
    pub fn tasa_impuesto(self) -> Decimal {
        match self {
            TipoVehiculo::Auto => Decimal::new(27, 2),
            TipoVehiculo::Camioneta => Decimal::new(17, 2),
            TipoVehiculo::Moto | TipoVehiculo::Camion => Decimal::new(5, 2),
        }
    }
}

impl fmt::Display for TipoVehiculo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            TipoVehiculo::Auto => "AUTO",
            TipoVehiculo::Camioneta => "CAMIONETA",
            TipoVehiculo::Moto => "MOTO",
            TipoVehiculo::Camion => "CAMION",
        };

        f.write_str(nombre)
    }
}

impl FromStr for TipoVehiculo {
    type Err = String;

    fn from_str(valor: &str) -> Result<Self, Self::Err> {
        match valor.to_ascii_uppercase().as_str() {
            "AUTO" => Ok(TipoVehiculo::Auto),
            "CAMIONETA" => Ok(TipoVehiculo::Camioneta),
            "MOTO" => Ok(TipoVehiculo::Moto),
            "CAMION" => Ok(TipoVehiculo::Camion),
            otro => Err(format!("tipo de vehículo desconocido: {otro}")),
        }
    }
}

/// A catalog vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehiculo {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
    pub color: String,
    pub tipo: TipoVehiculo,
    pub chasis: String,
    pub motor: String,
    pub precio_base: Decimal,
}

impl Vehiculo {
    /// Tax amount shown next to the base price.
    #[must_use]
    pub fn impuestos(&self) -> Decimal {
        self.precio_base * self.tipo.tasa_impuesto()
    }

    /// Base price plus the display-only tax amount.
    #[must_use]
    pub fn precio_final(&self) -> Decimal {
        self.precio_base + self.impuestos()
    }
}

/// Creation payload for a catalog vehicle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NuevoVehiculo {
    pub marca: String,
    pub modelo: String,
    pub color: String,
    pub tipo: TipoVehiculo,
    pub chasis: String,
    pub motor: String,
    pub precio_base: Decimal,
}

impl NuevoVehiculo {
    /// Client-side checks mirroring the registration form: every text
    /// field present and a strictly positive base price.
    ///
    /// # Errors
    ///
    /// Returns the message to display when a field is missing or the
    /// price is not positive.
    pub fn validar(&self) -> Result<(), String> {
        let campos = [
            &self.marca,
            &self.modelo,
            &self.color,
            &self.chasis,
            &self.motor,
        ];

        if campos.iter().any(|campo| campo.trim().is_empty()) {
            return Err("Todos los campos son obligatorios".to_string());
        }

        if self.precio_base <= Decimal::ZERO {
            return Err("El precio base debe ser mayor a cero".to_string());
        }

        Ok(())
    }
}
