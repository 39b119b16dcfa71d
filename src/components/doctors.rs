// ============================================================================
// DOCTORS - Directorio completo con filtro por especialidad
// ============================================================================
// El filtro viene del path (/doctors/{speciality}); el menú se genera desde
// config::SPECIALITIES.
// ============================================================================

use yew::prelude::*;

use crate::config::SPECIALITIES;
use crate::hooks::use_app_context;
use crate::models::Doctor;
use crate::utils::navigation::{doctors_path, navigate_to};

use super::DoctorCard;

#[derive(Properties, PartialEq)]
pub struct DoctorsProps {
    #[prop_or_default]
    pub speciality: Option<String>,
}

/// Igualdad exacta sobre el campo de especialidad, orden preservado.
/// Sin filtro devuelve la lista completa.
pub fn filter_by_speciality(doctors: &[Doctor], speciality: Option<&str>) -> Vec<Doctor> {
    match speciality {
        Some(speciality) => doctors
            .iter()
            .filter(|doctor| doctor.speciality == speciality)
            .cloned()
            .collect(),
        None => doctors.to_vec(),
    }
}

#[function_component(Doctors)]
pub fn doctors(props: &DoctorsProps) -> Html {
    let context = use_app_context();
    // Toggle puramente presentacional del sidebar en viewports angostos
    let show_filter = use_state(|| false);

    let doctors_list: Vec<Doctor> = (*context.store)
        .doctors
        .loaded()
        .cloned()
        .unwrap_or_default();

    let filtered = use_memo(
        (doctors_list, props.speciality.clone()),
        |(doctors, speciality)| filter_by_speciality(doctors, speciality.as_deref()),
    );

    let toggle_filter = {
        let show_filter = show_filter.clone();
        Callback::from(move |_| show_filter.set(!*show_filter))
    };

    html! {
        <div class="doctors-page">
            <h2 class="doctors-heading">{"Browse through the Doctors Specialist"}</h2>

            <button
                class={classes!("btn-filter-toggle", show_filter.then_some("active"))}
                onclick={toggle_filter}
            >
                { if *show_filter { "Hide Filters" } else { "Show Filters" } }
            </button>

            <div class={classes!("doctors-layout", (!*show_filter).then_some("filters-hidden"))}>
                <div class="speciality-menu">
                    { for SPECIALITIES.iter().map(|speciality| {
                        let is_active = props.speciality.as_deref() == Some(*speciality);
                        let onclick = {
                            let speciality: &'static str = *speciality;
                            Callback::from(move |_| {
                                // Clic en el filtro activo lo limpia; cualquier
                                // otro navega a su ruta filtrada
                                if is_active {
                                    navigate_to(&doctors_path(None));
                                } else {
                                    navigate_to(&doctors_path(Some(speciality)));
                                }
                            })
                        };
                        html! {
                            <p
                                key={*speciality}
                                class={classes!("speciality-option", is_active.then_some("selected"))}
                                {onclick}
                            >
                                {*speciality}
                            </p>
                        }
                    })}
                </div>

                <div class="doctors-grid">
                    {
                        if filtered.is_empty() {
                            let message = if props.speciality.is_some() {
                                "No doctors available for this specialization."
                            } else {
                                "No doctors available."
                            };
                            html! { <p class="doctors-empty">{message}</p> }
                        } else {
                            html! {
                                <>
                                    { for filtered.iter().map(|doctor| html! {
                                        <DoctorCard key={doctor.id.clone()} doctor={doctor.clone()} />
                                    })}
                                </>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: &str, speciality: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            speciality: speciality.to_string(),
            image: String::new(),
            fees: None,
        }
    }

    fn sample() -> Vec<Doctor> {
        vec![
            doctor("d1", "Dermatologist"),
            doctor("d2", "Neurologist"),
            doctor("d3", "Dermatologist"),
            doctor("d4", "Gynecologist"),
        ]
    }

    #[test]
    fn filters_by_exact_speciality_preserving_order() {
        let filtered = filter_by_speciality(&sample(), Some("Dermatologist"));
        let ids: Vec<&str> = filtered.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d1", "d3"]);
    }

    #[test]
    fn no_filter_returns_full_list_unchanged() {
        let list = sample();
        assert_eq!(filter_by_speciality(&list, None), list);
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_by_speciality(&sample(), Some("Dermatologist"));
        let twice = filter_by_speciality(&once, Some("Dermatologist"));
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_speciality_yields_empty() {
        assert!(filter_by_speciality(&sample(), Some("Cardiologist")).is_empty());
    }

    #[test]
    fn menu_specialities_match_only_their_subset() {
        let list = sample();
        for speciality in SPECIALITIES {
            let filtered = filter_by_speciality(&list, Some(speciality));
            assert!(filtered.iter().all(|d| d.speciality == speciality));
        }
    }
}
