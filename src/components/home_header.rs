use leptos::prelude::*;

use super::header::Header;

/// Header of the home page, with the feed's headline under the site bar.
#[component]
pub fn HomeHeader() -> impl IntoView {
    view! {
        <div class="home-header">
            <Header />
            <h1 class="home-headline">"Find a project that needs your skills"</h1>
        </div>
    }
}
