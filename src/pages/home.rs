use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use crate::components::{HomeHeader, ProjectCard, ProjectLoader, SearchBar, SearchTip};
use crate::context::use_api_context;
use crate::hooks::{use_on_screen, use_project_feed};

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api_context();
    let config = api.config();
    let feed = use_project_feed(api.source(), config.page_size, config.max_pages);

    // Marker after the last card; while it is on screen the feed may grow
    let sentinel = NodeRef::<Div>::new();
    let is_visible = use_on_screen(sentinel);

    // Re-check when visibility flips, a revalidation ends or a page settles
    let is_refreshing = Memo::new(move |_| feed.is_refreshing());
    let is_loading_more = Memo::new(move |_| feed.is_loading_more());
    Effect::new(move |_| {
        let visible = is_visible.get();
        is_refreshing.track();
        is_loading_more.track();
        feed.load_more(visible);
    });

    let focus = window_event_listener(ev::focus, move |_| feed.revalidate());
    on_cleanup(move || focus.remove());

    let projects = Memo::new(move |_| feed.projects());

    view! {
        <HomeHeader />

        <div class="content">
            <SearchTip />
            <SearchBar />

            {move || {
                let projects = projects.get();
                let count = projects.len();
                projects
                    .into_iter()
                    .enumerate()
                    .map(|(i, project)| {
                        let separated = i + 1 < count;
                        view! { <ProjectCard project=project add_separator_below=separated /> }
                    })
                    .collect_view()
            }}

            {move || {
                feed.error().map(|err| {
                    view! { <p class="feed-error">"Could not load projects: " {err.to_string()}</p> }
                })
            }}
            {move || {
                let empty = feed.error().is_none() && !is_loading_more.get() && projects.with(Vec::is_empty);
                empty.then(|| view! { <p class="feed-empty">"No projects to display yet."</p> })
            }}

            <div node_ref=sentinel>
                {move || is_loading_more.get().then(|| view! { <ProjectLoader /> })}
            </div>
        </div>
    }
}
