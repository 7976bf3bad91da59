use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Header;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Header />
        <div class="content">
            <h2 class="title">"Page not found"</h2>
            <p class="button-hint">
                <A href="/">"Back to the projects"</A>
            </p>
        </div>
    }
}
