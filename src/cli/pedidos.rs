//! Order commands: listing, detail with lifecycle, creation and
//! state advancement.

use clap::{Args, Subcommand};

use crate::{
    access::{Ruta, pedidos_visibles},
    cli::{ConexionArgs, exigir_acceso, render},
    clientes::{Cliente, ClientesService, HttpClientesService},
    pedidos::{
        Estado, FormaPago, HttpPedidosService, Pedido, PedidosService, estado_actual,
        transiciones_disponibles,
    },
    vehiculos::{HttpVehiculosService, Vehiculo, VehiculosService},
};

#[derive(Debug, Args)]
pub(crate) struct PedidosCommand {
    #[command(subcommand)]
    command: PedidosSubcommand,
}

#[derive(Debug, Subcommand)]
enum PedidosSubcommand {
    /// Listar los pedidos visibles para la identidad activa
    Listar(ListarArgs),
    /// Detalle de un pedido con su historial y transiciones
    Detalle(DetalleArgs),
    /// Crear un pedido para un cliente y un vehículo
    Crear(CrearArgs),
    /// Avanzar el estado de un pedido
    Avanzar(AvanzarArgs),
}

pub(crate) async fn run(command: PedidosCommand) -> Result<(), String> {
    match command.command {
        PedidosSubcommand::Listar(args) => listar(args).await,
        PedidosSubcommand::Detalle(args) => detalle(args).await,
        PedidosSubcommand::Crear(args) => crear(args).await,
        PedidosSubcommand::Avanzar(args) => avanzar(args).await,
    }
}

#[derive(Debug, Args)]
struct ListarArgs {
    #[command(flatten)]
    conexion: ConexionArgs,
}

async fn listar(args: ListarArgs) -> Result<(), String> {
    let identidad = exigir_acceso(&args.conexion.sesion(), Ruta::Pedidos)?;

    let servicio = HttpPedidosService::new(args.conexion.api());

    let pedidos = servicio
        .listar_pedidos()
        .await
        .map_err(|error| error.to_string())?;

    let visibles = pedidos_visibles(&identidad, pedidos);

    if visibles.is_empty() {
        println!("No hay pedidos para mostrar");
    } else {
        println!("{}", render::tabla_pedidos(&visibles));
    }

    Ok(())
}

#[derive(Debug, Args)]
struct DetalleArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Id del pedido
    #[arg(long)]
    pedido: i64,
}

async fn detalle(args: DetalleArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Pedidos)?;

    let servicio = HttpPedidosService::new(args.conexion.api());

    mostrar_detalle(&servicio, args.pedido).await
}

/// Fetch and print an order with its lifecycle. The history fetch is
/// best effort: on failure the detail is still shown, with the
/// lifecycle derived from an empty log.
async fn mostrar_detalle(servicio: &HttpPedidosService, pedido_id: i64) -> Result<(), String> {
    let pedido = servicio
        .obtener_pedido(pedido_id)
        .await
        .map_err(|error| error.to_string())?;

    let historial = match servicio.obtener_historial(pedido_id).await {
        Ok(historial) => historial,
        Err(error) => {
            tracing::warn!(pedido_id, %error, "no se pudo cargar el historial");
            Vec::new()
        }
    };

    imprimir_pedido(&pedido);

    println!("Historial:");

    if historial.is_empty() {
        println!("  (sin cambios registrados)");
    }

    for cambio in &historial {
        let fecha = cambio
            .fecha_cambio
            .map_or_else(|| "-".to_string(), |fecha| fecha.to_string());

        println!("  {fecha}  {}", cambio.estado);
    }

    let actual = estado_actual(&historial);
    let transiciones = transiciones_disponibles(actual);

    println!("Estado actual: {actual}");

    if actual.es_final() {
        println!("Este pedido ya está en el estado final");
    } else {
        let disponibles: Vec<String> = transiciones
            .iter()
            .map(|estado| estado.to_string())
            .collect();

        println!("Transiciones disponibles: {}", disponibles.join(", "));
    }

    Ok(())
}

fn imprimir_pedido(pedido: &Pedido) {
    println!("Pedido #{} ({})", pedido.id, pedido.numero_pedido);

    if let Some(fecha) = pedido.fecha_creacion {
        println!("Fecha: {fecha}");
    }

    if let Some(referencia) = &pedido.cliente {
        match referencia.completa() {
            Some(cliente) => println!("Cliente: {} {}", cliente.nombre, cliente.apellido),
            None => println!("Cliente: #{}", referencia.id()),
        }
    }

    if let Some(referencia) = &pedido.vehiculo {
        match referencia.completa() {
            Some(vehiculo) => println!("Vehículo: {} {}", vehiculo.marca, vehiculo.modelo),
            None => println!("Vehículo: #{}", referencia.id()),
        }
    }

    if let Some(configuracion) = &pedido.configuracion_extra {
        if !configuracion.is_empty() {
            println!("Configuración extra: {configuracion}");
        }
    }

    println!("Forma de pago: {}", pedido.forma_pago);

    if let Some(total) = pedido.total {
        println!("Total: ${total}");
    }
}

#[derive(Debug, Args)]
struct CrearArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Id del cliente
    #[arg(long)]
    cliente: i64,

    /// Id del vehículo
    #[arg(long)]
    vehiculo: i64,

    /// CONTADO, TRANSFERENCIA o TARJETA
    #[arg(long)]
    forma_pago: FormaPago,

    /// Equipamiento adicional solicitado
    #[arg(long, default_value = "")]
    configuracion_extra: String,
}

async fn crear(args: CrearArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Pedidos)?;

    let api = args.conexion.api();
    let servicio_clientes = HttpClientesService::new(api.clone());
    let servicio_vehiculos = HttpVehiculosService::new(api.clone());
    let servicio_pedidos = HttpPedidosService::new(api);

    let (cliente, vehiculo) = cargar_partes(
        &servicio_clientes,
        &servicio_vehiculos,
        args.cliente,
        args.vehiculo,
    )
    .await?;

    println!(
        "Creando pedido para {} {}: {} {} (precio final ${})",
        cliente.nombre,
        cliente.apellido,
        vehiculo.marca,
        vehiculo.modelo,
        vehiculo.precio_final()
    );

    let pedido = servicio_pedidos
        .crear_pedido(
            args.cliente,
            args.vehiculo,
            args.configuracion_extra,
            args.forma_pago,
        )
        .await
        .map_err(|error| error.to_string())?;

    println!("Pedido creado: #{} ({})", pedido.id, pedido.numero_pedido);

    Ok(())
}

/// Confirm both sides of the order exist before creating it. The two
/// fetches run concurrently and either failure aborts the creation.
async fn cargar_partes(
    clientes: &impl ClientesService,
    vehiculos: &impl VehiculosService,
    cliente_id: i64,
    vehiculo_id: i64,
) -> Result<(Cliente, Vehiculo), String> {
    tokio::try_join!(
        async {
            clientes
                .obtener_cliente(cliente_id)
                .await
                .map_err(|error| format!("Error al cargar datos: {error}"))
        },
        async {
            vehiculos
                .obtener_vehiculo(vehiculo_id)
                .await
                .map_err(|error| format!("Error al cargar datos: {error}"))
        },
    )
}

#[derive(Debug, Args)]
struct AvanzarArgs {
    #[command(flatten)]
    conexion: ConexionArgs,

    /// Id del pedido
    #[arg(long)]
    pedido: i64,

    /// Estado destino; obligatorio para avanzar
    #[arg(long)]
    estado: Option<Estado>,
}

async fn avanzar(args: AvanzarArgs) -> Result<(), String> {
    exigir_acceso(&args.conexion.sesion(), Ruta::Pedidos)?;

    let servicio = HttpPedidosService::new(args.conexion.api());

    servicio
        .avanzar_estado(args.pedido, args.estado)
        .await
        .map_err(|error| error.to_string())?;

    println!("Estado actualizado correctamente");

    // The backend owns the outcome; show it by refetching.
    mostrar_detalle(&servicio, args.pedido).await
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use reqwest::StatusCode;
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        access::pedidos_visibles,
        api::ApiError,
        clientes::{ClientesServiceError, MockClientesService},
        pedidos::{MockPedidosService, Referencia, SoloId},
        session::{Identidad, Rol},
        vehiculos::{MockVehiculosService, TipoVehiculo},
    };

    fn cliente(id: i64) -> Cliente {
        Cliente {
            id,
            nombre: "Ana".to_string(),
            apellido: "Paz".to_string(),
            documento: "30111222".to_string(),
            email: "ana@mail.com".to_string(),
            telefono: "1144455566".to_string(),
        }
    }

    fn vehiculo(id: i64) -> Vehiculo {
        Vehiculo {
            id,
            marca: "Toyota".to_string(),
            modelo: "Corolla".to_string(),
            color: "Gris".to_string(),
            tipo: TipoVehiculo::Auto,
            chasis: format!("CH-{id}"),
            motor: format!("MT-{id}"),
            precio_base: Decimal::new(1_000_000, 0),
        }
    }

    fn pedido_de(cliente_id: i64) -> Pedido {
        Pedido {
            id: cliente_id,
            numero_pedido: format!("PED-{cliente_id}"),
            cliente: Some(Referencia::SoloId(SoloId { id: cliente_id })),
            vehiculo: None,
            configuracion_extra: None,
            forma_pago: FormaPago::Contado,
            total: None,
            fecha_creacion: None,
            historial: Vec::new(),
        }
    }

    #[tokio::test]
    async fn las_partes_del_pedido_se_cargan_en_paralelo() {
        let mut clientes = MockClientesService::new();
        clientes
            .expect_obtener_cliente()
            .with(eq(4))
            .returning(|id| Ok(cliente(id)));

        let mut vehiculos = MockVehiculosService::new();
        vehiculos
            .expect_obtener_vehiculo()
            .with(eq(9))
            .returning(|id| Ok(vehiculo(id)));

        let (cliente, vehiculo) = cargar_partes(&clientes, &vehiculos, 4, 9)
            .await
            .expect("ambas partes existen");

        assert_eq!(cliente.id, 4);
        assert_eq!(vehiculo.id, 9);
    }

    #[tokio::test]
    async fn un_cliente_inexistente_aborta_la_creacion() {
        let mut clientes = MockClientesService::new();
        clientes.expect_obtener_cliente().returning(|_| {
            Err(ClientesServiceError::Api(ApiError::Backend {
                status: StatusCode::NOT_FOUND,
                message: "Cliente no encontrado".to_string(),
            }))
        });

        let mut vehiculos = MockVehiculosService::new();
        vehiculos
            .expect_obtener_vehiculo()
            .returning(|id| Ok(vehiculo(id)));

        let error = cargar_partes(&clientes, &vehiculos, 4, 9).await.unwrap_err();

        assert!(
            error.contains("Cliente no encontrado"),
            "error: {error}"
        );
    }

    #[tokio::test]
    async fn el_listado_del_cliente_se_filtra_a_sus_pedidos() {
        let mut servicio = MockPedidosService::new();
        servicio
            .expect_listar_pedidos()
            .returning(|| Ok(vec![pedido_de(7), pedido_de(8)]));

        let identidad = Identidad {
            username: "ana".to_string(),
            role: Rol::Cliente,
            email: Some("ana@mail.com".to_string()),
            cliente_id: Some(7),
        };

        let pedidos = servicio.listar_pedidos().await.expect("listado disponible");
        let visibles = pedidos_visibles(&identidad, pedidos);

        assert_eq!(visibles.len(), 1);
        assert_eq!(visibles[0].id, 7);
    }
}
