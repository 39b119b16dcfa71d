// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================

/// Configuración de la aplicación, resuelta en tiempo de compilación
/// via build.rs (.env → rustc-env)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL base del backend REST. Si falta, la carga de datos queda
    /// deshabilitada y se notifica al usuario (error de configuración).
    pub backend_url: Option<String>,
    pub enable_logging: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let backend_url = option_env!("BACKEND_URL")
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string());

        Self {
            backend_url,
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

/// Símbolo de moneda expuesto a las vistas (tarifas de consulta)
pub const CURRENCY_SYMBOL: &str = "Rs.";

/// Máximo de médicos mostrados en el widget de portada
pub const TOP_DOCTORS_LIMIT: usize = 10;

/// Especialidades del menú de filtros. Fuente única de verdad: el menú del
/// directorio y los enlaces de filtro se generan desde esta lista.
pub const SPECIALITIES: [&str; 6] = [
    "General Physician",
    "Gynecologist",
    "Dermatologist",
    "Pediatricians",
    "Neurologist",
    "Gastroenterologist",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speciality_menu_has_six_unique_entries() {
        let mut labels: Vec<&str> = SPECIALITIES.to_vec();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 6);
    }
}
