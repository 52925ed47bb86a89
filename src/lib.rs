//! AutoMax
//!
//! Typed client library for the AutoMax dealership backend: client
//! registry, vehicle catalog, order lifecycle, payment capture and
//! reporting. All business logic (tax computation, transition
//! acceptance, payment validation) lives server-side; this crate owns
//! the order-status derivation, the role-based access gate and the
//! HTTP gateway.

pub mod access;
pub mod api;
pub mod auth;
pub mod cli;
pub mod clientes;
pub mod pagos;
pub mod pedidos;
pub mod reportes;
pub mod session;
pub mod vehiculos;
