//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::session::{self, SessionState};

/// Username/password form. A successful login navigates home; a rejection
/// shows the store's user-facing error and leaves the form in place.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = move || {
        let credentials = Credentials {
            username: username.get().trim().to_owned(),
            password: password.get(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session::login(session, credentials).await.is_ok() {
                navigate("/", NavigateOptions::default());
            }
        });
    };
    let submit_on_enter = submit.clone();

    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <label class="form__label">
                "Username"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit_on_enter();
                        }
                    }
                />
            </label>
            {move || {
                session.get().last_error.map(|msg| view! { <p class="form__error">{msg}</p> })
            }}
            <button
                class="btn btn--primary"
                disabled=move || session.get().loading
                on:click=move |_| submit()
            >
                {move || if session.get().loading { "Logging in..." } else { "Log in" }}
            </button>
            <p class="login-page__hint">"No account yet? " <a href="/signup">"Sign up"</a></p>
        </div>
    }
}
