// ============================================================================
// TOP DOCTORS - Widget de portada: primeros 10 médicos de la lista
// ============================================================================

use yew::prelude::*;

use crate::config::TOP_DOCTORS_LIMIT;
use crate::hooks::use_app_context;
use crate::models::Doctor;
use crate::stores::FetchState;
use crate::utils::navigation::{doctors_path, navigate_to, scroll_to_top};

use super::DoctorCard;

/// Recorte del preview: min(n, 10) entradas, en el orden del backend
pub fn preview(doctors: &[Doctor]) -> &[Doctor] {
    &doctors[..doctors.len().min(TOP_DOCTORS_LIMIT)]
}

#[function_component(TopDoctors)]
pub fn top_doctors() -> Html {
    let context = use_app_context();

    let on_more_click = Callback::from(|_| {
        navigate_to(&doctors_path(None));
        scroll_to_top();
    });

    html! {
        <div class="top-doctors">
            <h1>{"Top Doctors to Book"}</h1>
            <p class="top-doctors-subtitle">
                {"Simply browse through our extensive list of trusted doctors."}
            </p>
            {
                match &(*context.store).doctors {
                    FetchState::NotStarted | FetchState::Loading => html! {
                        <p class="top-doctors-message">{"Loading doctors..."}</p>
                    },
                    FetchState::Loaded(doctors) if !doctors.is_empty() => html! {
                        <div class="top-doctors-grid">
                            { for preview(doctors).iter().map(|doctor| html! {
                                <DoctorCard key={doctor.id.clone()} doctor={doctor.clone()} />
                            })}
                        </div>
                    },
                    // Lista vacía cargada, o fetch fallido
                    _ => html! {
                        <p class="top-doctors-message">{"No doctors available."}</p>
                    },
                }
            }
            <button class="btn-more" onclick={on_more_click}>{"More.."}</button>
        </div>
    }
}
