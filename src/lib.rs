//! ProjectHub front end.
//!
//! A client-side Leptos application with two routes: `/`, an infinitely
//! scrolling feed of projects, and `/signup`, a signup form. Projects come
//! from a [`api::ProjectSource`] chosen at start-up from [`config::AppConfig`].

pub mod api;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod feed;
pub mod hooks;
pub mod pages;
pub mod styles;
pub mod types;

use gloo::console::log;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen::JsValue;

use config::AppConfig;
use context::{provide_api_context, ApiContext};
use pages::{HomePage, NotFound, SignupPage};

#[component]
pub fn App(context: ApiContext) -> impl IntoView {
    provide_api_context(context);

    view! {
        <style>{styles::stylesheet()}</style>
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/signup") view=SignupPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Reads the build-time configuration, builds the data source and mounts the
/// app. A source that cannot be built is reported to the page as an error.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    log!(format!("Starting with the {:?} data source", config.data_source));
    let context = ApiContext::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    leptos::mount::mount_to_body(move || view! { <App context=context /> });
    Ok(())
}
