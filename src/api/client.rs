//! Typed wrapper over HTTP calls to the backend.

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::api::{ApiError, Descarga, nombre_de_content_disposition};

/// Default filename when the export response carries no usable
/// `Content-Disposition` header.
const NOMBRE_CSV_POR_DEFECTO: &str = "reporte_pedidos.csv";

/// Configuration for connecting to the dealership backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base path, e.g. `"http://localhost:8080/api"`.
    pub base_url: String,
}

/// HTTP client for the dealership REST API.
///
/// Cheap to clone; every domain service holds one.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

/// Error body shape the backend uses for rejections. Only the
/// human-readable message is modeled; there are no structured codes.
#[derive(Debug, Deserialize)]
struct CuerpoError {
    message: Option<String>,
}

impl ApiClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// GET a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, backend rejection
    /// (normalized with `fallback` as the generic message) or a
    /// malformed response body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;

        decode_json(response, fallback).await
    }

    /// GET a JSON resource with query parameters.
    ///
    /// # Errors
    ///
    /// Same contract as [`ApiClient::get_json`].
    pub async fn get_json_con_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;

        decode_json(response, fallback).await
    }

    /// POST a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// Same contract as [`ApiClient::get_json`].
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;

        decode_json(response, fallback).await
    }

    /// PUT with query parameters and no body, decoding the JSON reply.
    ///
    /// # Errors
    ///
    /// Same contract as [`ApiClient::get_json`].
    pub async fn put_json_con_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = self.http.put(self.url(path)).query(query).send().await?;

        decode_json(response, fallback).await
    }

    /// GET a binary payload, extracting the download filename from the
    /// `Content-Disposition` header when present.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or backend rejection.
    pub async fn get_descarga(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<Descarga, ApiError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;

        if !response.status().is_success() {
            return Err(error_de_respuesta(response, fallback).await);
        }

        let nombre_archivo = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|valor| valor.to_str().ok())
            .and_then(nombre_de_content_disposition)
            .unwrap_or_else(|| NOMBRE_CSV_POR_DEFECTO.to_string());

        let datos = response.bytes().await?;

        Ok(Descarga {
            nombre_archivo,
            datos: datos.to_vec(),
        })
    }
}

async fn decode_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(error_de_respuesta(response, fallback).await);
    }

    let texto = response.text().await?;

    serde_json::from_str(&texto).map_err(ApiError::Parse)
}

/// Normalize a non-2xx response into a single backend rejection:
/// parse the JSON error body for its `message` field and fall back to
/// the per-operation generic message when parsing fails or the field
/// is absent.
async fn error_de_respuesta(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let texto = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<CuerpoError>(&texto)
        .ok()
        .and_then(|cuerpo| cuerpo.message)
        .unwrap_or_else(|| fallback.to_string());

    ApiError::Backend { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuerpo_error_con_message() {
        let cuerpo: CuerpoError =
            serde_json::from_str(r#"{"message":"Pedido no encontrado"}"#).unwrap();

        assert_eq!(cuerpo.message.as_deref(), Some("Pedido no encontrado"));
    }

    #[test]
    fn cuerpo_error_sin_message() {
        let cuerpo: CuerpoError = serde_json::from_str(r#"{"error":"otro"}"#).unwrap();

        assert!(cuerpo.message.is_none());
    }

    #[test]
    fn url_concatena_base_y_ruta() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:8080/api".to_string(),
        });

        assert_eq!(
            client.url("/pedidos/3/historial"),
            "http://localhost:8080/api/pedidos/3/historial"
        );
    }
}
