// ============================================================================
// NAVIGATION - Rutas internas via History API (sin router externo)
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Event;

/// Evento custom que dispara el re-parseo de la ruta tras pushState
pub const ROUTE_CHANGE_EVENT: &str = "routechange";

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Doctors { speciality: Option<String> },
    Appointment { doctor_id: String },
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["doctors"] => Route::Doctors { speciality: None },
            ["doctors", speciality] => Route::Doctors {
                speciality: Some(decode_segment(speciality)),
            },
            ["appointment", doctor_id] => Route::Appointment {
                doctor_id: decode_segment(doctor_id),
            },
            _ => Route::NotFound,
        }
    }
}

pub fn doctors_path(speciality: Option<&str>) -> String {
    match speciality {
        Some(speciality) => format!("/doctors/{}", encode_segment(speciality)),
        None => "/doctors".to_string(),
    }
}

pub fn appointment_path(doctor_id: &str) -> String {
    format!("/appointment/{}", encode_segment(doctor_id))
}

/// Decodificar un segmento percent-encoded (el navegador codifica los
/// espacios de las etiquetas de especialidad)
pub fn decode_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(high * 16 + low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| segment.to_string())
}

pub fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Navegar a una ruta interna y notificar a los listeners de ruta
pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if history
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .is_err()
    {
        log::error!("❌ pushState falló para: {}", path);
        return;
    }
    log::info!("🧭 Navegando a: {}", path);
    if let Ok(event) = Event::new(ROUTE_CHANGE_EVENT) {
        let _ = window.dispatch_event(&event);
    }
}

/// Resetear el scroll al tope (al navegar desde un card)
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_as_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn parses_unfiltered_directory() {
        assert_eq!(Route::parse("/doctors"), Route::Doctors { speciality: None });
        // Barra final tolerada
        assert_eq!(Route::parse("/doctors/"), Route::Doctors { speciality: None });
    }

    #[test]
    fn parses_filtered_directory_with_encoded_label() {
        assert_eq!(
            Route::parse("/doctors/Dermatologist"),
            Route::Doctors {
                speciality: Some("Dermatologist".to_string())
            }
        );
        assert_eq!(
            Route::parse("/doctors/General%20Physician"),
            Route::Doctors {
                speciality: Some("General Physician".to_string())
            }
        );
    }

    #[test]
    fn parses_appointment_route() {
        assert_eq!(
            Route::parse("/appointment/d1"),
            Route::Appointment {
                doctor_id: "d1".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/unknown"), Route::NotFound);
        assert_eq!(Route::parse("/doctors/a/b"), Route::NotFound);
    }

    #[test]
    fn encode_decode_roundtrip() {
        for label in ["General Physician", "Gynecologist", "a/b c%d"] {
            assert_eq!(decode_segment(&encode_segment(label)), label);
        }
    }

    #[test]
    fn malformed_escapes_pass_through() {
        assert_eq!(decode_segment("100%"), "100%");
        assert_eq!(decode_segment("%zz"), "%zz");
    }

    #[test]
    fn doctors_path_encodes_speciality() {
        assert_eq!(
            doctors_path(Some("General Physician")),
            "/doctors/General%20Physician"
        );
        assert_eq!(doctors_path(None), "/doctors");
    }

    #[test]
    fn filter_paths_roundtrip_through_route_parse() {
        let path = doctors_path(Some("General Physician"));
        assert_eq!(
            Route::parse(&path),
            Route::Doctors {
                speciality: Some("General Physician".to_string())
            }
        );
    }
}
