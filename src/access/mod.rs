//! Role-based access control: navigation gating plus the independent
//! row-level visibility filters.

mod filtros;
mod rutas;

pub use filtros::{ids_vehiculos_vendidos, pedidos_visibles, vehiculos_visibles};
pub use rutas::{Decision, Ruta, autorizar, roles_requeridos, rutas_permitidas};
