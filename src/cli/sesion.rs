//! Session commands: login, registration, logout and the home view.

use clap::Args;

use crate::{
    access::{Ruta, rutas_permitidas},
    auth::{AuthService, Credenciales, HttpAuthService, Registro},
    cli::{ConexionArgs, exigir_acceso},
    session::Rol,
};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Nombre de usuario
    #[arg(long)]
    username: String,

    /// Contraseña
    #[arg(long)]
    password: String,
}

pub(crate) async fn login(args: LoginArgs) -> Result<(), String> {
    let servicio = HttpAuthService::new(args.conexion.api());

    let identidad = servicio
        .login(Credenciales {
            username: args.username,
            password: args.password,
        })
        .await
        .map_err(|error| error.to_string())?;

    args.conexion
        .sesion()
        .guardar(&identidad)
        .map_err(|error| format!("no se pudo guardar la sesión: {error}"))?;

    println!("Bienvenido, {} ({})", identidad.username, identidad.role);

    Ok(())
}

#[derive(Debug, Args)]
pub(crate) struct RegistroArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Nombre de usuario
    #[arg(long)]
    username: String,

    /// Contraseña
    #[arg(long)]
    password: String,

    /// Rol de la cuenta
    #[arg(long, default_value = "CLIENTE")]
    role: Rol,

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

pub(crate) async fn registro(args: RegistroArgs) -> Result<(), String> {
    let servicio = HttpAuthService::new(args.conexion.api());

    let identidad = servicio
        .registrar(Registro {
            username: args.username,
            password: args.password,
            role: args.role,
            nombre: args.nombre,
            apellido: args.apellido,
            documento: args.documento,
            email: args.email,
            telefono: args.telefono,
        })
        .await
        .map_err(|error| error.to_string())?;

    println!(
        "Registro exitoso: {}. Ya puedes iniciar sesión.",
        identidad.username
    );

    Ok(())
}

#[derive(Debug, Args)]
pub(crate) struct LogoutArgs {
    #[command(flatten)]
    conexion: ConexionArgs,
}

pub(crate) fn logout(args: LogoutArgs) -> Result<(), String> {
    args.conexion
        .sesion()
        .limpiar()
        .map_err(|error| format!("no se pudo cerrar la sesión: {error}"))?;

    println!("Sesión cerrada");

    Ok(())
}

#[derive(Debug, Args)]
pub(crate) struct InicioArgs {
    #[command(flatten)]
    conexion: ConexionArgs,
}

pub(crate) fn inicio(args: InicioArgs) -> Result<(), String> {
    let identidad = exigir_acceso(&args.conexion.sesion(), Ruta::Inicio)?;

    println!("Bienvenido, {}", identidad.username);
    println!("Rol: {}", identidad.role);
    println!("Secciones disponibles:");

    for ruta in rutas_permitidas(identidad.role) {
        println!("  - {ruta}");
    }

    Ok(())
}
