use yew::prelude::*;

use crate::models::Doctor;
use crate::utils::navigation::{appointment_path, navigate_to, scroll_to_top};

#[derive(Properties, PartialEq, Clone)]
pub struct DoctorCardProps {
    pub doctor: Doctor,
}

/// Card clickeable de médico: navega a la página de cita y resetea el scroll
#[function_component(DoctorCard)]
pub fn doctor_card(props: &DoctorCardProps) -> Html {
    let doctor = &props.doctor;

    let on_card_click = {
        let doctor_id = doctor.id.clone();
        Callback::from(move |_: MouseEvent| {
            navigate_to(&appointment_path(&doctor_id));
            scroll_to_top();
        })
    };

    html! {
        <div class="doctor-card" onclick={on_card_click}>
            <img
                class="doctor-image"
                src={doctor.image_or_placeholder().to_string()}
                alt={doctor.name.clone()}
            />
            <div class="doctor-card-body">
                // Sin estado en tiempo real: siempre se presenta disponible
                <div class="doctor-availability">
                    <span class="availability-dot"></span>
                    <p>{"Available"}</p>
                </div>
                <p class="doctor-name">{&doctor.name}</p>
                <p class="doctor-speciality">{&doctor.speciality}</p>
            </div>
        </div>
    }
}
