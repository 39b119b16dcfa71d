use yew::prelude::*;

use crate::utils::navigation::{doctors_path, navigate_to, scroll_to_top};

#[function_component(Header)]
pub fn header() -> Html {
    let on_home = Callback::from(|_| navigate_to("/"));
    let on_doctors = Callback::from(|_| {
        navigate_to(&doctors_path(None));
        scroll_to_top();
    });

    html! {
        <header class="app-header">
            <h1 class="app-title" onclick={on_home}>{"MediBook"}</h1>
            <nav class="header-nav">
                <button class="nav-link" onclick={on_doctors}>{"All Doctors"}</button>
            </nav>
        </header>
    }
}
