// ============================================================================
// USE ROUTE HOOK - Ruta actual derivada del pathname
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::utils::navigation::{current_path, Route, ROUTE_CHANGE_EVENT};

/// Re-parsea el pathname en popstate y en el evento custom emitido por
/// navigate_to. Usarlo una sola vez (en el router raíz) para no acumular
/// listeners globales; el efecto los remueve al desmontar.
#[hook]
pub fn use_route() -> Route {
    let route = use_state(|| Route::parse(&current_path()));

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                route.set(Route::parse(&current_path()));
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window().expect("no window");
            for event_name in ["popstate", ROUTE_CHANGE_EVENT] {
                let _ = window
                    .add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref());
            }

            move || {
                for event_name in ["popstate", ROUTE_CHANGE_EVENT] {
                    let _ = window.remove_event_listener_with_callback(
                        event_name,
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    (*route).clone()
}
