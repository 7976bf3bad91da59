use leptos::prelude::*;

/// Skeleton of a project card, shown while a page is loading.
#[component]
pub fn ProjectLoader() -> impl IntoView {
    view! {
        <div class="project-loader" aria-busy="true">
            <div class="bar title"></div>
            <div class="bar"></div>
            <div class="bar short"></div>
        </div>
    }
}
