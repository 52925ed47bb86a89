//! Login and registration.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    api::ApiClient,
    auth::{AuthServiceError, Credenciales, Registro},
    clientes::{ClientesService, HttpClientesService, NuevoCliente},
    session::Identidad,
};

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    api: ApiClient,
    clientes: HttpClientesService,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            clientes: HttpClientesService::new(api.clone()),
            api,
        }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, credenciales: Credenciales) -> Result<Identidad, AuthServiceError> {
        let identidad = self
            .api
            .post_json("/auth/login", &credenciales, "Credenciales inválidas")
            .await?;

        Ok(identidad)
    }

    async fn registrar(&self, registro: Registro) -> Result<Identidad, AuthServiceError> {
        let identidad: Identidad = self
            .api
            .post_json("/auth/register", &registro, "Error al registrar")
            .await?;

        // The account exists at this point; a failure creating the
        // linked customer record downgrades to a warning rather than
        // undoing the registration.
        let cliente = NuevoCliente {
            nombre: registro.nombre,
            apellido: registro.apellido,
            documento: registro.documento,
            email: registro.email,
            telefono: registro.telefono,
        };

        if let Err(error) = self.clientes.crear_cliente(cliente).await {
            tracing::warn!(
                username = %identidad.username,
                %error,
                "el registro no creó el cliente asociado"
            );
        }

        Ok(identidad)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for an identity payload.
    async fn login(&self, credenciales: Credenciales) -> Result<Identidad, AuthServiceError>;

    /// Create an account and, best effort, its linked customer record.
    async fn registrar(&self, registro: Registro) -> Result<Identidad, AuthServiceError>;
}
