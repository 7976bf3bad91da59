use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <A href="/">
                <span class="logo">"ProjectHub"</span>
            </A>
            <nav class="main-nav">
                <A href="/">"Projects"</A>
                <A href="/signup">"Signup"</A>
            </nav>
        </header>
    }
}
