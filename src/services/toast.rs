// ============================================================================
// TOAST - Notificaciones transitorias para el usuario
// ============================================================================
// Todos los errores de fetch terminan aquí: nunca se propagan a las vistas.
// ============================================================================

use gloo_timers::callback::Timeout;

const TOAST_CONTAINER_ID: &str = "toast-container";
const TOAST_DURATION_MS: u32 = 4_000;

pub fn toast_error(message: &str) {
    show("toast-error", message);
}

pub fn toast_info(message: &str) {
    show("toast-info", message);
}

fn show(kind: &str, message: &str) {
    log::warn!("🔔 Toast [{}]: {}", kind, message);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // Contenedor único, creado bajo demanda
    let container = match document.get_element_by_id(TOAST_CONTAINER_ID) {
        Some(el) => el,
        None => {
            let Ok(el) = document.create_element("div") else {
                return;
            };
            el.set_id(TOAST_CONTAINER_ID);
            el.set_class_name("toast-container");
            if let Some(body) = document.body() {
                let _ = body.append_child(&el);
            }
            el
        }
    };

    let Ok(toast) = document.create_element("div") else {
        return;
    };
    toast.set_class_name(&format!("toast {}", kind));
    toast.set_text_content(Some(message));
    let _ = container.append_child(&toast);

    // El navegador limpia los listeners del nodo al removerlo; forget() es seguro
    Timeout::new(TOAST_DURATION_MS, move || {
        toast.remove();
    })
    .forget();
}
