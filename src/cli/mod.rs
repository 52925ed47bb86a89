//! Automax terminal front-end.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    access::{Decision, Ruta, autorizar, roles_requeridos},
    api::{ApiClient, ApiConfig},
    session::{Identidad, SessionStore},
};

mod clientes;
mod pagos;
mod pedidos;
mod render;
mod reportes;
mod sesion;
mod vehiculos;

#[derive(Debug, Parser)]
#[command(name = "automax", about = "Automax dealership CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Iniciar sesión contra el backend
    Login(sesion::LoginArgs),
    /// Registrar una cuenta nueva
    Registro(sesion::RegistroArgs),
    /// Cerrar la sesión local
    Logout(sesion::LogoutArgs),
    /// Mostrar la identidad activa y sus secciones disponibles
    Inicio(sesion::InicioArgs),
    /// Gestión de clientes
    Clientes(clientes::ClientesCommand),
    /// Catálogo de vehículos
    Vehiculos(vehiculos::VehiculosCommand),
    /// Pedidos y su ciclo de vida
    Pedidos(pedidos::PedidosCommand),
    /// Pagos de un pedido
    Pagos(pagos::PagosCommand),
    /// Reportes y exportación
    Reportes(reportes::ReportesCommand),
}

impl Cli {
    /// Dispatch the parsed command.
    ///
    /// # Errors
    ///
    /// Returns the message to print before exiting non-zero.
    pub async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Login(args) => sesion::login(args).await,
            Commands::Registro(args) => sesion::registro(args).await,
            Commands::Logout(args) => sesion::logout(args),
            Commands::Inicio(args) => sesion::inicio(args),
            Commands::Clientes(command) => clientes::run(command).await,
            Commands::Vehiculos(command) => vehiculos::run(command).await,
            Commands::Pedidos(command) => pedidos::run(command).await,
            Commands::Pagos(command) => pagos::run(command).await,
            Commands::Reportes(command) => reportes::run(command).await,
        }
    }
}

/// Connection and session settings shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct ConexionArgs {
    /// Base URL of the dealership backend API
    #[arg(
        long,
        env = "AUTOMAX_API_URL",
        default_value = "http://localhost:8080/api"
    )]
    api_url: String,

    /// Directory where the session is persisted
    #[arg(long, env = "AUTOMAX_SESSION_DIR", default_value = ".automax")]
    session_dir: PathBuf,
}

impl ConexionArgs {
    pub(crate) fn api(&self) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: self.api_url.clone(),
        })
    }

    pub(crate) fn sesion(&self) -> SessionStore {
        SessionStore::new(&self.session_dir)
    }
}

/// Restore the session and gate the requested section. Without a
/// session every section redirects to login; with one, the section's
/// role requirements decide.
pub(crate) fn exigir_acceso(store: &SessionStore, ruta: Ruta) -> Result<Identidad, String> {
    let identidad = store
        .restaurar()
        .map_err(|error| format!("no se pudo restaurar la sesión: {error}"))?;

    match autorizar(identidad.as_ref(), roles_requeridos(ruta)) {
        Decision::Permitir => identidad.ok_or_else(|| debes_iniciar_sesion(ruta)),
        Decision::RedirigirAlIngreso => Err(debes_iniciar_sesion(ruta)),
        Decision::Denegar { rol } => Err(format!(
            "Acceso Denegado: no tienes permisos para acceder a {ruta}. Tu rol actual es: {rol}"
        )),
    }
}

fn debes_iniciar_sesion(ruta: Ruta) -> String {
    format!("Debes iniciar sesión para acceder a {ruta}")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::session::Rol;

    #[test]
    fn sin_sesion_redirige_al_ingreso() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path());

        let error = exigir_acceso(&store, Ruta::Vehiculos).unwrap_err();

        assert!(error.contains("Debes iniciar sesión"), "error: {error}");

        Ok(())
    }

    #[test]
    fn vendedor_no_entra_a_reportes() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path());

        store.guardar(&Identidad {
            username: "vendedor".to_string(),
            role: Rol::Vendedor,
            email: None,
            cliente_id: None,
        })?;

        let error = exigir_acceso(&store, Ruta::Reportes).unwrap_err();

        assert!(
            error.contains("Tu rol actual es: VENDEDOR"),
            "error: {error}"
        );
        assert!(exigir_acceso(&store, Ruta::Vehiculos).is_ok());

        Ok(())
    }
}
