//! Stale-response guard for selection-scoped fetches.
//!
//! There is no request cancellation: switching the selected order
//! while a fetch for the previous selection is in flight would let the
//! older response land last and overwrite newer state. Each selection
//! change takes a fresh generation token; a response is accepted only
//! while its token is still the current one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic token tied to one selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generacion(u64);

/// Issues generation tokens and decides which responses are still
/// current.
#[derive(Debug, Default)]
pub struct Seleccion {
    actual: AtomicU64,
}

impl Seleccion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new selection, invalidating every earlier token.
    pub fn nueva_generacion(&self) -> Generacion {
        Generacion(self.actual.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a token still refers to the latest selection.
    #[must_use]
    pub fn es_vigente(&self, generacion: Generacion) -> bool {
        generacion.0 == self.actual.load(Ordering::SeqCst)
    }

    /// Keep the value only when its token is still current; a stale
    /// response is discarded instead of overwriting newer state.
    pub fn aceptar<T>(&self, generacion: Generacion, valor: T) -> Option<T> {
        self.es_vigente(generacion).then_some(valor)
    }
}
