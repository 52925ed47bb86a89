//! Payment commands. Admin only; at most one payment per order is
//! captured from here.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::{
    access::Ruta,
    cli::{ConexionArgs, exigir_acceso, render},
    pagos::{HttpPagosService, NuevoPago, Pago, PagosService},
    pedidos::seleccion::Seleccion,
};

#[derive(Debug, Args)]
pub(crate) struct PagosCommand {
    #[command(subcommand)]
    command: PagosSubcommand,
}

#[derive(Debug, Subcommand)]
enum PagosSubcommand {
    /// Listar los pagos de un pedido
    Listar(ListarArgs),
    /// Registrar un pago al contado
    Contado(ContadoArgs),
    /// Registrar un pago por transferencia
    Transferencia(TransferenciaArgs),
    /// Registrar un pago con tarjeta
    Tarjeta(TarjetaArgs),
}

pub(crate) async fn run(command: PagosCommand) -> Result<(), String> {
    match command.command {
        PagosSubcommand::Listar(args) => listar(args).await,
        PagosSubcommand::Contado(args) => {
            crear(
                args.comunes,
                NuevoPago::Contado {
                    descuento: args.descuento,
                },
            )
            .await
        }
        PagosSubcommand::Transferencia(args) => {
            crear(
                args.comunes,
                NuevoPago::Transferencia {
                    banco: args.banco,
                    cbu: args.cbu,
                },
            )
            .await
        }
        PagosSubcommand::Tarjeta(args) => {
            crear(
                args.comunes,
                NuevoPago::Tarjeta {
                    numero_tarjeta: args.numero_tarjeta,
                    titular: args.titular,
                    fecha_expiracion: args.fecha_expiracion,
                    cvv: args.cvv,
                },
            )
            .await
        }
    }
}

#[derive(Debug, Args)]
struct ListarArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Id del pedido
    #[arg(long)]
    pedido: i64,
}

async fn listar(args: ListarArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Pagos)?;

    let servicio = HttpPagosService::new(args.conexion.api());
    let seleccion = Seleccion::new();

    let Some(pagos) = pagos_de_la_seleccion(&servicio, &seleccion, args.pedido).await? else {
        return Ok(());
    };

    if pagos.is_empty() {
        println!("El pedido {} no tiene pagos registrados", args.pedido);
    } else {
        println!("{}", render::tabla_pagos(&pagos));
    }

    Ok(())
}

/// Fetch the payments of the currently selected order. The generation
/// token is taken before the fetch; when the selection moves on while
/// the fetch is in flight, the response is dropped (`None`) instead of
/// being shown against the newer selection.
async fn pagos_de_la_seleccion(
    servicio: &impl PagosService,
    seleccion: &Seleccion,
    pedido_id: i64,
) -> Result<Option<Vec<Pago>>, String> {
    let generacion = seleccion.nueva_generacion();

    let pagos = servicio
        .listar_pagos(pedido_id)
        .await
        .map_err(|error| error.to_string())?;

    Ok(seleccion.aceptar(generacion, pagos))
}

#[derive(Debug, Args)]
struct PagoComunArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Id del pedido
    #[arg(long)]
    pedido: i64,
}

#[derive(Debug, Args)]
struct ContadoArgs {
    #[command(flatten)]
    comunes: PagoComunArgs,

    /// Descuento porcentual, entre 0 y 100
    #[arg(long, default_value = "0")]
    descuento: Decimal,
}

#[derive(Debug, Args)]
struct TransferenciaArgs {
    #[command(flatten)]
    comunes: PagoComunArgs,

    #[arg(long)]
    banco: String,

    #[arg(long)]
    cbu: String,
}

#[derive(Debug, Args)]
struct TarjetaArgs {
    #[command(flatten)]
    comunes: PagoComunArgs,

    #[arg(long)]
    numero_tarjeta: String,

    #[arg(long)]
    titular: String,

    /// Vencimiento, p. ej. 12/27
    #[arg(long)]
    fecha_expiracion: String,

    #[arg(long)]
    cvv: String,
}

async fn crear(comunes: PagoComunArgs, pago: NuevoPago) -> Result<(), String> {
    exigir_acceso(&comunes.conexion.sesion(), Ruta::Pagos)?;

    let servicio = HttpPagosService::new(comunes.conexion.api());

    let existentes = servicio
        .listar_pagos(comunes.pedido)
        .await
        .map_err(|error| error.to_string())?;

    if !existentes.is_empty() {
        return Err(format!(
            "El pedido {} ya tiene un pago registrado",
            comunes.pedido
        ));
    }

    let creado = servicio
        .crear_pago(comunes.pedido, pago)
        .await
        .map_err(|error| error.to_string())?;

    println!(
        "Pago registrado para el pedido {}: {}",
        comunes.pedido,
        creado.tipo_pago.unwrap_or_else(|| "N/A".to_string())
    );

    Ok(())
}
