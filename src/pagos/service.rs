//! Payment capture service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    pagos::{NuevoPago, Pago, PagosServiceError},
};

#[derive(Debug, Clone)]
pub struct HttpPagosService {
    api: ApiClient,
}

impl HttpPagosService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PagosService for HttpPagosService {
    async fn listar_pagos(&self, pedido_id: i64) -> Result<Vec<Pago>, PagosServiceError> {
        let pagos = self
            .api
            .get_json(
                &format!("/pedidos/{pedido_id}/pagos"),
                "Error al cargar pagos",
            )
            .await?;

        Ok(pagos)
    }

    async fn crear_pago(&self, pedido_id: i64, pago: NuevoPago) -> Result<Pago, PagosServiceError> {
        pago.validar().map_err(PagosServiceError::Validacion)?;

        let creado = self
            .api
            .post_json(
                &format!("/pedidos/{pedido_id}/pagos/{}", pago.segmento()),
                &pago,
                "Error al registrar pago",
            )
            .await?;

        Ok(creado)
    }
}

#[automock]
#[async_trait]
pub trait PagosService: Send + Sync {
    /// Payments recorded against an order.
    async fn listar_pagos(&self, pedido_id: i64) -> Result<Vec<Pago>, PagosServiceError>;

    /// Capture a payment against an order via the endpoint of its
    /// variant, after client-side validation.
    async fn crear_pago(&self, pedido_id: i64, pago: NuevoPago) -> Result<Pago, PagosServiceError>;
}
