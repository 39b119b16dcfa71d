use yew::prelude::*;

use crate::hooks::use_app_context;
use crate::services::toast;
use crate::stores::FetchState;

#[derive(Properties, PartialEq)]
pub struct AppointmentProps {
    pub doctor_id: String,
}

/// Página de cita por médico. La reserva en sí vive en el backend; aquí
/// solo se presenta el médico seleccionado desde el store compartido.
#[function_component(Appointment)]
pub fn appointment(props: &AppointmentProps) -> Html {
    let context = use_app_context();
    let store = &*context.store;

    let doctor = store
        .doctors
        .loaded()
        .and_then(|doctors| doctors.iter().find(|d| d.id == props.doctor_id))
        .cloned();

    let on_book_click = {
        let has_token = store.token.is_some();
        Callback::from(move |_| {
            if has_token {
                toast::toast_info("Online booking is not available yet.");
            } else {
                toast::toast_error("Login to book appointment");
            }
        })
    };

    html! {
        <div class="appointment-page">
            {
                match doctor {
                    Some(doctor) => html! {
                        <div class="appointment-doctor">
                            <img
                                class="doctor-image"
                                src={doctor.image_or_placeholder().to_string()}
                                alt={doctor.name.clone()}
                            />
                            <h2 class="doctor-name">{&doctor.name}</h2>
                            <p class="doctor-speciality">{&doctor.speciality}</p>
                            <div class="doctor-availability">
                                <span class="availability-dot"></span>
                                <p>{"Available"}</p>
                            </div>
                            {
                                match doctor.fees {
                                    Some(fees) => html! {
                                        <p class="appointment-fee">
                                            {format!("Appointment fee: {}{}", context.currency_symbol, fees)}
                                        </p>
                                    },
                                    None => html! {},
                                }
                            }
                            <button class="btn-book" onclick={on_book_click}>
                                {"Book an appointment"}
                            </button>
                        </div>
                    },
                    None if store.doctors.is_loading() => html! {
                        <p class="appointment-message">{"Loading doctors..."}</p>
                    },
                    None => html! {
                        <p class="appointment-message">{"Doctor not found."}</p>
                    },
                }
            }
        </div>
    }
}
