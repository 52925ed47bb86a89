//! Authenticated session state.

mod errors;
mod models;
mod store;

pub use errors::SessionError;
pub use models::{Identidad, Rol};
pub use store::SessionStore;
