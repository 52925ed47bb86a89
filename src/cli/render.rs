//! Table rendering for the terminal.

use rustc_hash::FxHashSet;
use tabled::{builder::Builder, settings::Style};

use crate::{
    clientes::Cliente,
    pagos::Pago,
    pedidos::{Pedido, estado_actual},
    vehiculos::Vehiculo,
};

fn tabla(builder: Builder) -> String {
    let mut tabla = builder.build();
    tabla.with(Style::sharp());

    tabla.to_string()
}

pub(crate) fn tabla_clientes(clientes: &[Cliente]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Nombre", "Apellido", "Documento", "Email", "Teléfono"]);

    for cliente in clientes {
        builder.push_record([
            cliente.id.to_string(),
            cliente.nombre.clone(),
            cliente.apellido.clone(),
            cliente.documento.clone(),
            cliente.email.clone(),
            cliente.telefono.clone(),
        ]);
    }

    tabla(builder)
}

/// Catalog table. The availability column only appears for ADMIN,
/// who also sees sold vehicles.
pub(crate) fn tabla_vehiculos(
    vehiculos: &[Vehiculo],
    vendidos: Option<&FxHashSet<i64>>,
) -> String {
    let mut builder = Builder::default();

    let mut encabezado = vec![
        "ID".to_string(),
        "Marca".to_string(),
        "Modelo".to_string(),
        "Color".to_string(),
        "Tipo".to_string(),
        "Chasis".to_string(),
        "Motor".to_string(),
        "Precio Base".to_string(),
        "Impuestos".to_string(),
        "Precio Final".to_string(),
    ];

    if vendidos.is_some() {
        encabezado.push("Estado".to_string());
    }

    builder.push_record(encabezado);

    for vehiculo in vehiculos {
        let mut fila = vec![
            vehiculo.id.to_string(),
            vehiculo.marca.clone(),
            vehiculo.modelo.clone(),
            vehiculo.color.clone(),
            vehiculo.tipo.to_string(),
            vehiculo.chasis.clone(),
            vehiculo.motor.clone(),
            format!("${}", vehiculo.precio_base),
            format!("${}", vehiculo.impuestos()),
            format!("${}", vehiculo.precio_final()),
        ];

        if let Some(vendidos) = vendidos {
            let estado = if vendidos.contains(&vehiculo.id) {
                "VENDIDO"
            } else {
                "DISPONIBLE"
            };

            fila.push(estado.to_string());
        }

        builder.push_record(fila);
    }

    tabla(builder)
}

pub(crate) fn tabla_pedidos(pedidos: &[Pedido]) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        "ID",
        "Número",
        "Fecha",
        "Cliente",
        "Vehículo",
        "Total",
        "Forma de Pago",
        "Estado",
    ]);

    for pedido in pedidos {
        let cliente = pedido.cliente.as_ref().map_or_else(
            || "-".to_string(),
            |referencia| {
                referencia.completa().map_or_else(
                    || format!("(cliente #{} sin resolver)", referencia.id()),
                    |cliente| format!("{} {}", cliente.nombre, cliente.apellido),
                )
            },
        );

        let vehiculo = pedido.vehiculo.as_ref().map_or_else(
            || "-".to_string(),
            |referencia| {
                referencia.completa().map_or_else(
                    || format!("(vehículo #{} sin resolver)", referencia.id()),
                    |vehiculo| format!("{} {}", vehiculo.marca, vehiculo.modelo),
                )
            },
        );

        builder.push_record([
            pedido.id.to_string(),
            pedido.numero_pedido.clone(),
            pedido
                .fecha_creacion
                .map_or_else(|| "-".to_string(), |fecha| fecha.date().to_string()),
            cliente,
            vehiculo,
            pedido
                .total
                .map_or_else(|| "-".to_string(), |total| format!("${total}")),
            pedido.forma_pago.to_string(),
            estado_actual(&pedido.historial).to_string(),
        ]);
    }

    tabla(builder)
}

pub(crate) fn tabla_pagos(pagos: &[Pago]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Tipo", "Detalle"]);

    for pago in pagos {
        let detalle = if let Some(descuento) = pago.descuento {
            format!("Descuento: {descuento}%")
        } else if let Some(banco) = &pago.banco {
            format!("Banco: {banco}")
        } else if let Some(tarjeta) = pago.tarjeta_enmascarada() {
            format!("Tarjeta: {tarjeta}")
        } else {
            "-".to_string()
        };

        builder.push_record([
            pago.tipo_pago.clone().unwrap_or_else(|| "N/A".to_string()),
            detalle,
        ]);
    }

    tabla(builder)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::vehiculos::TipoVehiculo;

    #[test]
    fn tabla_vehiculos_con_columna_de_estado() {
        let vehiculos = [Vehiculo {
            id: 1,
            marca: "Fiat".to_string(),
            modelo: "Cronos".to_string(),
            color: "Negro".to_string(),
            tipo: TipoVehiculo::Auto,
            chasis: "CH-1".to_string(),
            motor: "MT-1".to_string(),
            precio_base: Decimal::new(100, 0),
        }];

        let vendidos: FxHashSet<i64> = [1].into_iter().collect();
        let salida = tabla_vehiculos(&vehiculos, Some(&vendidos));

        assert!(salida.contains("VENDIDO"), "salida: {salida}");

        let salida = tabla_vehiculos(&vehiculos, None);

        assert!(!salida.contains("DISPONIBLE"), "salida: {salida}");
    }
}
