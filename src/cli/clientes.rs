//! Customer management commands. Admin only.

use clap::{Args, Subcommand};

use crate::{
    access::Ruta,
    cli::{ConexionArgs, exigir_acceso, render},
    clientes::{ClientesService, HttpClientesService, NuevoCliente},
};

#[derive(Debug, Args)]
pub(crate) struct ClientesCommand {
    #[command(subcommand)]
    command: ClientesSubcommand,
}

#[derive(Debug, Subcommand)]
enum ClientesSubcommand {
    /// Listar los clientes registrados
    Listar(ListarArgs),
    /// Registrar un cliente nuevo
    Crear(CrearArgs),
}

pub(crate) async fn run(command: ClientesCommand) -> Result<(), String> {
    match command.command {
        ClientesSubcommand::Listar(args) => listar(args).await,
        ClientesSubcommand::Crear(args) => crear(args).await,
    }
}

#[derive(Debug, Args)]
struct ListarArgs {
    #[command(flatten)]
    conexion: ConexionArgs,
}

async fn listar(args: ListarArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Clientes)?;

    let servicio = HttpClientesService::new(args.conexion.api());

    let clientes = servicio
        .listar_clientes()
        .await
        .map_err(|error| error.to_string())?;

    println!("{}", render::tabla_clientes(&clientes));

    Ok(())
}

#[derive(Debug, Args)]
struct CrearArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    #[arg(long)]
    nombre: String,

    #[arg(long)]
    apellido: String,

    #[arg(long)]
    documento: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    telefono: String,
}

async fn crear(args: CrearArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Clientes)?;

    let servicio = HttpClientesService::new(args.conexion.api());

    let cliente = servicio
        .crear_cliente(NuevoCliente {
            nombre: args.nombre,
            apellido: args.apellido,
            documento: args.documento,
            email: args.email,
            telefono: args.telefono,
        })
        .await
        .map_err(|error| error.to_string())?;

    println!(
        "Cliente registrado: #{} {} {}",
        cliente.id, cliente.nombre, cliente.apellido
    );

    Ok(())
}
