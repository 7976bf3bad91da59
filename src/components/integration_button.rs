use leptos::prelude::*;

/// Round button linking to a third-party signup provider.
#[component]
pub fn IntegrationButton(
    href: &'static str,
    icon: &'static str,
    alt: &'static str,
) -> impl IntoView {
    view! {
        <a class="integration-button" href=href>
            <img width="32" src=icon alt=alt />
        </a>
    }
}
