//! Reporting: filtered listings, totals and CSV export.

mod errors;
mod service;

pub use errors::ReportesServiceError;
pub use service::*;
