//! Vehicle catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    vehiculos::{NuevoVehiculo, Vehiculo, VehiculosServiceError},
};

#[derive(Debug, Clone)]
pub struct HttpVehiculosService {
    api: ApiClient,
}

impl HttpVehiculosService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl VehiculosService for HttpVehiculosService {
    async fn listar_vehiculos(&self) -> Result<Vec<Vehiculo>, VehiculosServiceError> {
        let vehiculos = self
            .api
            .get_json("/vehiculos", "Error al cargar vehículos")
            .await?;

        Ok(vehiculos)
    }

    async fn obtener_vehiculo(&self, id: i64) -> Result<Vehiculo, VehiculosServiceError> {
        let vehiculo = self
            .api
            .get_json(&format!("/vehiculos/{id}"), "Error al cargar vehículo")
            .await?;

        Ok(vehiculo)
    }

    async fn crear_vehiculo(
        &self,
        vehiculo: NuevoVehiculo,
    ) -> Result<Vehiculo, VehiculosServiceError> {
        vehiculo
            .validar()
            .map_err(VehiculosServiceError::Validacion)?;

        let creado = self
            .api
            .post_json("/vehiculos", &vehiculo, "Error al crear vehículo")
            .await?;

        Ok(creado)
    }
}

#[automock]
#[async_trait]
pub trait VehiculosService: Send + Sync {
    /// Retrieve the whole catalog.
    async fn listar_vehiculos(&self) -> Result<Vec<Vehiculo>, VehiculosServiceError>;

    /// Retrieve a single vehicle by id.
    async fn obtener_vehiculo(&self, id: i64) -> Result<Vehiculo, VehiculosServiceError>;

    /// Register a new vehicle after client-side validation.
    async fn crear_vehiculo(
        &self,
        vehiculo: NuevoVehiculo,
    ) -> Result<Vehiculo, VehiculosServiceError>;
}
