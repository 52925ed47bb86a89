//! File-backed session persistence.

use std::fs;
use std::path::PathBuf;

use crate::session::{Identidad, SessionError};

/// Fixed name under which the identity is persisted, mirroring the
/// single session-storage key the web client used.
const ARCHIVO_USUARIO: &str = "usuario.json";

/// Holds the authenticated identity across process runs.
///
/// Lifecycle is explicit: [`SessionStore::restaurar`] on startup,
/// [`SessionStore::guardar`] after login/registration,
/// [`SessionStore::limpiar`] on logout. A missing file simply means
/// no session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    directorio: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the given directory.
    #[must_use]
    pub fn new(directorio: impl Into<PathBuf>) -> Self {
        Self {
            directorio: directorio.into(),
        }
    }

    fn archivo(&self) -> PathBuf {
        self.directorio.join(ARCHIVO_USUARIO)
    }

    /// Restore the persisted identity, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or
    /// decoded.
    pub fn restaurar(&self) -> Result<Option<Identidad>, SessionError> {
        let archivo = self.archivo();

        if !archivo.exists() {
            return Ok(None);
        }

        let contenido = fs::read_to_string(archivo)?;
        let identidad = serde_json::from_str(&contenido)?;

        Ok(Some(identidad))
    }

    /// Persist the identity, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns an error when the session directory or file cannot be
    /// written.
    pub fn guardar(&self, identidad: &Identidad) -> Result<(), SessionError> {
        fs::create_dir_all(&self.directorio)?;

        let contenido = serde_json::to_string_pretty(identidad)?;
        fs::write(self.archivo(), contenido)?;

        Ok(())
    }

    /// Remove the persisted identity. Removing an absent session is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be removed.
    pub fn limpiar(&self) -> Result<(), SessionError> {
        let archivo = self.archivo();

        if archivo.exists() {
            fs::remove_file(archivo)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::session::Rol;

    fn identidad() -> Identidad {
        Identidad {
            username: "ana".to_string(),
            role: Rol::Cliente,
            email: Some("ana@mail.com".to_string()),
            cliente_id: Some(7),
        }
    }

    #[test]
    fn restaurar_sin_sesion_previa() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path());

        assert_eq!(store.restaurar()?, None);

        Ok(())
    }

    #[test]
    fn guardar_y_restaurar() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path());

        store.guardar(&identidad())?;

        assert_eq!(store.restaurar()?, Some(identidad()));

        Ok(())
    }

    #[test]
    fn limpiar_destruye_la_sesion() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path());

        store.guardar(&identidad())?;
        store.limpiar()?;

        assert_eq!(store.restaurar()?, None);

        Ok(())
    }

    #[test]
    fn limpiar_sin_sesion_no_falla() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path());

        store.limpiar()?;

        Ok(())
    }

    #[test]
    fn archivo_corrupto_es_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store = SessionStore::new(dir.path());

        std::fs::write(dir.path().join("usuario.json"), "{ no es json")?;

        assert!(store.restaurar().is_err());

        Ok(())
    }
}
