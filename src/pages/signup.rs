use gloo::console::log;
use leptos::prelude::*;
use leptos_router::components::A;
use web_sys::SubmitEvent;

use crate::components::{Header, IntegrationButton};

/// An input of the signup form.
pub struct SignupField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
}

pub static SIGNUP_FIELDS: [SignupField; 4] = [
    SignupField { name: "username", label: "Username", input_type: "text", placeholder: "JohnDoe" },
    SignupField { name: "email", label: "E-mail", input_type: "text", placeholder: "john@email.com" },
    SignupField { name: "password", label: "Password", input_type: "password", placeholder: "********" },
    SignupField {
        name: "confirmPassword",
        label: "Confirm password",
        input_type: "password",
        placeholder: "********",
    },
];

/// The part of a submit event the signup handler needs.
pub trait SubmitAction {
    fn prevent_default(&self);
}

impl SubmitAction for SubmitEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Keeps the browser on the page and stops there. Account creation is not
/// wired to a backend yet.
pub fn submit_signup(ev: &impl SubmitAction) {
    ev.prevent_default();
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        submit_signup(&ev);
        log!("Form submitted!");
    };

    let fields = SIGNUP_FIELDS
        .iter()
        .map(|field| {
            view! {
                <label class="input-label" for=field.name>{field.label}</label>
                <input
                    class="input"
                    name=field.name
                    id=field.name
                    type=field.input_type
                    placeholder=field.placeholder
                />
            }
        })
        .collect_view();

    view! {
        <Header />

        <form class="signup-sheet" on:submit=handle_submit novalidate=true>
            <h2 class="title">"Signup"</h2>

            <div class="input-wrap">
                {fields}

                <button class="button" type="submit">"Signup"</button>
                <p class="button-hint">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
                <p class="button-hint signup-with">"or signup with"</p>
                <div class="integrations">
                    <IntegrationButton href="#" icon="/icons/google.png" alt="Register with Google" />
                    <IntegrationButton href="#" icon="/icons/github.png" alt="Register with GitHub" />
                </div>
            </div>
        </form>
    }
}
