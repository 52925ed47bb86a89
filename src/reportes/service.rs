//! Reporting service.

use std::collections::BTreeMap;

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    api::{ApiClient, Descarga},
    pedidos::{Estado, Pedido},
    reportes::ReportesServiceError,
};

/// Totals keyed by the label the backend chose (e.g. a payment
/// method). Rendered verbatim.
pub type Totales = BTreeMap<String, Decimal>;

#[derive(Debug, Clone)]
pub struct HttpReportesService {
    api: ApiClient,
}

impl HttpReportesService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn query_reporte(desde: Date, estado: Option<Estado>) -> Vec<(&'static str, String)> {
    let mut query = vec![("desde", desde.to_string())];

    if let Some(estado) = estado {
        query.push(("estado", estado.to_string()));
    }

    query
}

#[async_trait]
impl ReportesService for HttpReportesService {
    async fn reporte_pedidos(
        &self,
        desde: Date,
        estado: Option<Estado>,
    ) -> Result<Vec<Pedido>, ReportesServiceError> {
        let pedidos = self
            .api
            .get_json_con_query(
                "/reportes/pedidos",
                &query_reporte(desde, estado),
                "Error al cargar reporte",
            )
            .await?;

        Ok(pedidos)
    }

    async fn totales(
        &self,
        desde: Date,
        hasta: Date,
        incluir_impuestos: bool,
    ) -> Result<Totales, ReportesServiceError> {
        let totales = self
            .api
            .get_json_con_query(
                "/reportes/totales",
                &[
                    ("desde", desde.to_string()),
                    ("hasta", hasta.to_string()),
                    ("incluirImpuestos", incluir_impuestos.to_string()),
                ],
                "Error al cargar totales",
            )
            .await?;

        Ok(totales)
    }

    async fn exportar_csv(
        &self,
        desde: Date,
        hasta: Date,
        estado: Option<Estado>,
    ) -> Result<Descarga, ReportesServiceError> {
        let mut query = vec![("desde", desde.to_string()), ("hasta", hasta.to_string())];

        if let Some(estado) = estado {
            query.push(("estado", estado.to_string()));
        }

        let descarga = self
            .api
            .get_descarga("/reportes/pedidos/csv", &query, "Error al exportar CSV")
            .await?;

        Ok(descarga)
    }
}

#[automock]
#[async_trait]
pub trait ReportesService: Send + Sync {
    /// Orders created since `desde`, optionally restricted to one
    /// lifecycle stage.
    async fn reporte_pedidos(
        &self,
        desde: Date,
        estado: Option<Estado>,
    ) -> Result<Vec<Pedido>, ReportesServiceError>;

    /// Aggregated totals for a date range.
    async fn totales(
        &self,
        desde: Date,
        hasta: Date,
        incluir_impuestos: bool,
    ) -> Result<Totales, ReportesServiceError>;

    /// CSV export of orders for a date range; the filename comes from
    /// the `Content-Disposition` header or a fixed default.
    async fn exportar_csv(
        &self,
        desde: Date,
        hasta: Date,
        estado: Option<Estado>,
    ) -> Result<Descarga, ReportesServiceError>;
}
