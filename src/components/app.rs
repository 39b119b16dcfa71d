// ============================================================================
// APP - Componente raíz: provider de contexto + despacho de rutas
// ============================================================================

use yew::prelude::*;

use crate::hooks::{use_route, AppContextProvider};
use crate::utils::navigation::Route;

use super::{Appointment, Doctors, Header, TopDoctors};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppContextProvider>
            <Header />
            <Main />
        </AppContextProvider>
    }
}

#[function_component(Main)]
fn main_view() -> Html {
    let route = use_route();

    match route {
        Route::Home => html! { <TopDoctors /> },
        Route::Doctors { speciality } => html! { <Doctors {speciality} /> },
        Route::Appointment { doctor_id } => html! { <Appointment {doctor_id} /> },
        Route::NotFound => html! { <p class="not-found">{"Page not found."}</p> },
    }
}
