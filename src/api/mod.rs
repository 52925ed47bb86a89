//! HTTP gateway to the dealership backend.

mod client;
mod download;
mod errors;

pub use client::{ApiClient, ApiConfig};
pub use download::{Descarga, nombre_de_content_disposition};
pub use errors::ApiError;
