//! Vehicle catalog commands.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::{
    access::{Ruta, ids_vehiculos_vendidos, vehiculos_visibles},
    cli::{ConexionArgs, exigir_acceso, render},
    pedidos::{HttpPedidosService, Pedido, PedidosService},
    session::Rol,
    vehiculos::{HttpVehiculosService, NuevoVehiculo, TipoVehiculo, Vehiculo, VehiculosService},
};

#[derive(Debug, Args)]
pub(crate) struct VehiculosCommand {
    #[command(subcommand)]
    command: VehiculosSubcommand,
}

#[derive(Debug, Subcommand)]
enum VehiculosSubcommand {
    /// Listar el catálogo según el rol activo
    Listar(ListarArgs),
    /// Registrar un vehículo nuevo
    Crear(CrearArgs),
}

pub(crate) async fn run(command: VehiculosCommand) -> Result<(), String> {
    match command.command {
        VehiculosSubcommand::Listar(args) => listar(args).await,
        VehiculosSubcommand::Crear(args) => crear(args).await,
    }
}

#[derive(Debug, Args)]
struct ListarArgs {
    #[command(flatten)]
    conexion: ConexionArgs,
}

async fn listar(args: ListarArgs) -> Result<(), String> {
    let identidad = exigir_acceso(&args.conexion.sesion(), Ruta::Vehiculos)?;

    let api = args.conexion.api();
    let servicio_vehiculos = HttpVehiculosService::new(api.clone());
    let servicio_pedidos = HttpPedidosService::new(api);

    let (vehiculos, pedidos) = cargar_catalogo(&servicio_vehiculos, &servicio_pedidos).await?;

    let vendidos = ids_vehiculos_vendidos(&pedidos);
    let visibles = vehiculos_visibles(identidad.role, vehiculos, &vendidos);

    if identidad.role == Rol::Admin {
        println!("{}", render::tabla_vehiculos(&visibles, Some(&vendidos)));
    } else {
        println!("Mostrando solo vehículos disponibles para la venta");
        println!("{}", render::tabla_vehiculos(&visibles, None));
    }

    Ok(())
}

/// All-or-nothing fan-out: the availability marker needs the orders,
/// so a failure on either side fails the whole listing.
async fn cargar_catalogo(
    vehiculos: &impl VehiculosService,
    pedidos: &impl PedidosService,
) -> Result<(Vec<Vehiculo>, Vec<Pedido>), String> {
    tokio::try_join!(
        async {
            vehiculos
                .listar_vehiculos()
                .await
                .map_err(|error| format!("Error al cargar datos: {error}"))
        },
        async {
            pedidos
                .listar_pedidos()
                .await
                .map_err(|error| format!("Error al cargar datos: {error}"))
        },
    )
}

#[derive(Debug, Args)]
struct CrearArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    #[arg(long)]
    marca: String,

    #[arg(long)]
    modelo: String,

    #[arg(long)]
    color: String,

    /// AUTO, CAMIONETA, MOTO o CAMION
    #[arg(long)]
    tipo: TipoVehiculo,

    #[arg(long)]
    chasis: String,

    #[arg(long)]
    motor: String,

    #[arg(long)]
    precio_base: Decimal,
}

async fn crear(args: CrearArgs) -> Result<(), String> {
    let identidad = exigir_acceso(&args.conexion.sesion(), Ruta::Vehiculos)?;

    // The section admits every role, the registration action does not.
    if identidad.role != Rol::Admin {
        return Err(format!(
            "Solo un administrador puede registrar vehículos. Tu rol actual es: {}",
            identidad.role
        ));
    }

    let servicio = HttpVehiculosService::new(args.conexion.api());

    let vehiculo = servicio
        .crear_vehiculo(NuevoVehiculo {
            marca: args.marca,
            modelo: args.modelo,
            color: args.color,
            tipo: args.tipo,
            chasis: args.chasis,
            motor: args.motor,
            precio_base: args.precio_base,
        })
        .await
        .map_err(|error| error.to_string())?;

    println!(
        "Vehículo registrado: #{} {} {} (precio final ${})",
        vehiculo.id,
        vehiculo.marca,
        vehiculo.modelo,
        vehiculo.precio_final()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        pedidos::{FormaPago, MockPedidosService, PedidosServiceError},
        vehiculos::{MockVehiculosService, VehiculosServiceError},
    };

    fn vehiculo(id: i64) -> Vehiculo {
        Vehiculo {
            id,
            marca: "Fiat".to_string(),
            modelo: "Cronos".to_string(),
            color: "Negro".to_string(),
            tipo: TipoVehiculo::Auto,
            chasis: format!("CH-{id}"),
            motor: format!("MT-{id}"),
            precio_base: Decimal::new(1_000_000, 0),
        }
    }

    fn pedido(id: i64) -> Pedido {
        Pedido {
            id,
            numero_pedido: format!("PED-{id}"),
            cliente: None,
            vehiculo: None,
            configuracion_extra: None,
            forma_pago: FormaPago::Contado,
            total: None,
            fecha_creacion: None,
            historial: Vec::new(),
        }
    }

    #[tokio::test]
    async fn el_catalogo_une_vehiculos_y_pedidos() {
        let mut vehiculos = MockVehiculosService::new();
        vehiculos
            .expect_listar_vehiculos()
            .returning(|| Ok(vec![vehiculo(1), vehiculo(2)]));

        let mut pedidos = MockPedidosService::new();
        pedidos.expect_listar_pedidos().returning(|| Ok(vec![pedido(9)]));

        let (catalogo, listado) = cargar_catalogo(&vehiculos, &pedidos)
            .await
            .expect("ambas cargas responden");

        assert_eq!(catalogo.len(), 2);
        assert_eq!(listado.len(), 1);
    }

    #[tokio::test]
    async fn un_fallo_en_los_pedidos_descarta_todo_el_listado() {
        let mut vehiculos = MockVehiculosService::new();
        vehiculos
            .expect_listar_vehiculos()
            .returning(|| Ok(vec![vehiculo(1)]));

        let mut pedidos = MockPedidosService::new();
        pedidos
            .expect_listar_pedidos()
            .returning(|| Err(PedidosServiceError::EstadoNoSeleccionado));

        let error = cargar_catalogo(&vehiculos, &pedidos).await.unwrap_err();

        assert!(error.starts_with("Error al cargar datos"), "error: {error}");
    }

    #[tokio::test]
    async fn un_fallo_en_los_vehiculos_descarta_todo_el_listado() {
        let mut vehiculos = MockVehiculosService::new();
        vehiculos.expect_listar_vehiculos().returning(|| {
            Err(VehiculosServiceError::Validacion(
                "Todos los campos son obligatorios".to_string(),
            ))
        });

        let mut pedidos = MockPedidosService::new();
        pedidos.expect_listar_pedidos().returning(|| Ok(Vec::new()));

        let error = cargar_catalogo(&vehiculos, &pedidos).await.unwrap_err();

        assert!(error.starts_with("Error al cargar datos"), "error: {error}");
    }
}
