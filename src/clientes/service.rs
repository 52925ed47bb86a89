//! Client registry service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    clientes::{Cliente, ClientesServiceError, NuevoCliente},
};

#[derive(Debug, Clone)]
pub struct HttpClientesService {
    api: ApiClient,
}

impl HttpClientesService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ClientesService for HttpClientesService {
    async fn listar_clientes(&self) -> Result<Vec<Cliente>, ClientesServiceError> {
        let clientes = self
            .api
            .get_json("/clientes", "Error al cargar clientes")
            .await?;

        Ok(clientes)
    }

    async fn obtener_cliente(&self, id: i64) -> Result<Cliente, ClientesServiceError> {
        let cliente = self
            .api
            .get_json(&format!("/clientes/{id}"), "Error al cargar cliente")
            .await?;

        Ok(cliente)
    }

    async fn crear_cliente(&self, cliente: NuevoCliente) -> Result<Cliente, ClientesServiceError> {
        let creado = self
            .api
            .post_json("/clientes", &cliente, "Error al crear cliente")
            .await?;

        Ok(creado)
    }
}

#[automock]
#[async_trait]
pub trait ClientesService: Send + Sync {
    /// Retrieve every registered customer.
    async fn listar_clientes(&self) -> Result<Vec<Cliente>, ClientesServiceError>;

    /// Retrieve a single customer by id.
    async fn obtener_cliente(&self, id: i64) -> Result<Cliente, ClientesServiceError>;

    /// Register a new customer.
    async fn crear_cliente(&self, cliente: NuevoCliente) -> Result<Cliente, ClientesServiceError>;
}
