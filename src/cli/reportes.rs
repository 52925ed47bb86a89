//! Reporting commands. Admin only.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use jiff::civil::Date;

use crate::{
    access::Ruta,
    cli::{ConexionArgs, exigir_acceso, render},
    pedidos::Estado,
    reportes::{HttpReportesService, ReportesService},
};

#[derive(Debug, Args)]
pub(crate) struct ReportesCommand {
    #[command(subcommand)]
    command: ReportesSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReportesSubcommand {
    /// Pedidos creados desde una fecha, con filtro opcional por estado
    Pedidos(PedidosArgs),
    /// Totales agregados de un rango de fechas
    Totales(TotalesArgs),
    /// Exportar el reporte de pedidos como CSV
    Csv(CsvArgs),
}

pub(crate) async fn run(command: ReportesCommand) -> Result<(), String> {
    match command.command {
        ReportesSubcommand::Pedidos(args) => pedidos(args).await,
        ReportesSubcommand::Totales(args) => totales(args).await,
        ReportesSubcommand::Csv(args) => csv(args).await,
    }
}

#[derive(Debug, Args)]
struct PedidosArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Fecha inicial, p. ej. 2025-01-01
    #[arg(long)]
    desde: Date,

    /// Filtrar por estado del ciclo de vida
    #[arg(long)]
    estado: Option<Estado>,
}

async fn pedidos(args: PedidosArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Reportes)?;

    let servicio = HttpReportesService::new(args.conexion.api());

    let pedidos = servicio
        .reporte_pedidos(args.desde, args.estado)
        .await
        .map_err(|error| error.to_string())?;

    if pedidos.is_empty() {
        println!("No hay pedidos en el período");
    } else {
        println!("{}", render::tabla_pedidos(&pedidos));
    }

    Ok(())
}

#[derive(Debug, Args)]
struct TotalesArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Fecha inicial del rango
    #[arg(long)]
    desde: Date,

    /// Fecha final del rango
    #[arg(long)]
    hasta: Date,

    /// Incluir los impuestos en los montos
    #[arg(long)]
    incluir_impuestos: bool,
}

async fn totales(args: TotalesArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Reportes)?;

    let servicio = HttpReportesService::new(args.conexion.api());

    let totales = servicio
        .totales(args.desde, args.hasta, args.incluir_impuestos)
        .await
        .map_err(|error| error.to_string())?;

    if totales.is_empty() {
        println!("No hay totales en el período");
    }

    for (etiqueta, monto) in &totales {
        println!("{etiqueta}: ${monto}");
    }

    Ok(())
}

#[derive(Debug, Args)]
struct CsvArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Fecha inicial del rango
    #[arg(long)]
    desde: Date,

    /// Fecha final del rango
    #[arg(long)]
    hasta: Date,

    /// Filtrar por estado del ciclo de vida
    #[arg(long)]
    estado: Option<Estado>,

    /// Ruta de salida; por defecto el nombre que indique el backend
    #[arg(long)]
    salida: Option<PathBuf>,
}

async fn csv(args: CsvArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Reportes)?;

    let servicio = HttpReportesService::new(args.conexion.api());

    let descarga = servicio
        .exportar_csv(args.desde, args.hasta, args.estado)
        .await
        .map_err(|error| error.to_string())?;

    let destino = args
        .salida
        .unwrap_or_else(|| PathBuf::from(&descarga.nombre_archivo));

    fs::write(&destino, &descarga.datos)
        .map_err(|error| format!("no se pudo escribir {}: {error}", destino.display()))?;

    println!("CSV descargado correctamente: {}", destino.display());

    Ok(())
}
