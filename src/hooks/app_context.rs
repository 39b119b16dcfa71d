// ============================================================================
// APP CONTEXT - Compartir el estado global entre componentes
// ============================================================================
// ContextProvider de Yew en lugar de un singleton ambiental: el estado se
// crea en el provider y se inyecta a las vistas.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_app_state::{use_app_state, UseAppContextHandle};

/// Provider que envuelve la app y proporciona el estado global
#[function_component(AppContextProvider)]
pub fn app_context_provider(props: &AppContextProviderProps) -> Html {
    let handle = use_app_state();

    html! {
        <ContextProvider<UseAppContextHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAppContextHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppContextProviderProps {
    pub children: Children,
}

/// Hook consumidor: acceso al contexto desde cualquier vista bajo el provider
#[hook]
pub fn use_app_context() -> UseAppContextHandle {
    use_context::<UseAppContextHandle>()
        .expect("use_app_context debe usarse dentro de AppContextProvider")
}
