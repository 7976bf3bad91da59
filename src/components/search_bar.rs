use leptos::prelude::*;

#[component]
pub fn SearchTip() -> impl IntoView {
    view! {
        <label class="tip" for="query">
            <img src="/icons/lightbulb.svg" alt="Tip Icon" height="20" width="20" />
            "Tip: you can search by project name, keyword and needed skills."
        </label>
    }
}

#[component]
pub fn SearchBar() -> impl IntoView {
    view! {
        <input
            class="search-bar"
            id="query"
            name="q"
            type="text"
            placeholder="Search for a project"
        />
    }
}
