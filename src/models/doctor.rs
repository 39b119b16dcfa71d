use serde::{Deserialize, Serialize};

/// Imagen por defecto cuando el backend no envía una
pub const DEFAULT_DOCTOR_IMAGE: &str = "/default-doctor.png";

/// Médico tal como lo entrega el backend. Inmutable del lado del cliente:
/// la lista se reemplaza entera en cada fetch, sin merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    // El backend usa ambas grafías para el mismo concepto
    #[serde(alias = "specialization")]
    pub speciality: String,
    #[serde(default)]
    pub image: String,
    /// Tarifa de consulta; no todos los registros la traen
    #[serde(default)]
    pub fees: Option<f64>,
}

impl Doctor {
    pub fn image_or_placeholder(&self) -> &str {
        if self.image.is_empty() {
            DEFAULT_DOCTOR_IMAGE
        } else {
            &self.image
        }
    }
}
