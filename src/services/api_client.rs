// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Doctor, UserProfile};

/// Fallos de transporte, en las tres formas que distingue la UI.
/// El texto de Display es el mensaje que ve el usuario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// El servidor respondió con un estado de error
    #[error("Error {status}: {message}")]
    Server { status: u16, message: String },
    /// La petición salió pero no hubo respuesta del backend
    #[error("No response from the server. Check if backend is running.")]
    NoResponse,
    /// La petición no se pudo construir o la respuesta no se pudo leer
    #[error("{0}")]
    Request(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DoctorListResponse {
    pub success: bool,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfileResponse {
    pub success: bool,
    #[serde(rename = "userData", default)]
    pub user_data: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Listar médicos
    pub async fn get_doctor_list(&self) -> Result<DoctorListResponse, ApiError> {
        let url = format!("{}/api/doctor/list", self.base_url);

        log::info!("📋 Obteniendo lista de médicos: {}", url);

        let response = Request::get(&url).send().await.map_err(map_send_error)?;

        if !response.ok() {
            return Err(server_error(&response).await);
        }

        response
            .json::<DoctorListResponse>()
            .await
            .map_err(|e| ApiError::Request(format!("Parse error: {}", e)))
    }

    /// Obtener perfil del usuario autenticado (bearer token)
    pub async fn get_user_profile(&self, token: &str) -> Result<UserProfileResponse, ApiError> {
        let url = format!("{}/api/user/get-profile", self.base_url);

        log::info!("👤 Obteniendo perfil de usuario: {}", url);

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.ok() {
            return Err(server_error(&response).await);
        }

        response
            .json::<UserProfileResponse>()
            .await
            .map_err(|e| ApiError::Request(format!("Parse error: {}", e)))
    }
}

/// El fetch del navegador rechaza sin respuesta ante fallos de red;
/// cualquier otro error es de construcción de la petición.
fn map_send_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::JsError(_) => ApiError::NoResponse,
        other => ApiError::Request(other.to_string()),
    }
}

async fn server_error(response: &Response) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
    }

    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody { message: Some(m) }) => m,
        _ => response.status_text(),
    };

    ApiError::Server { status, message }
}
