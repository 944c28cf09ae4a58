//! Signup page with username/nickname availability probes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupForm;
use crate::state::session::{self, Availability, SessionState};

fn availability_label(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "Available",
        Availability::Taken => "Already taken",
        Availability::Unknown => "Could not check (server error)",
    }
}

fn availability_class(availability: Availability) -> &'static str {
    match availability {
        Availability::Available => "form__check form__check--ok",
        Availability::Taken => "form__check form__check--taken",
        Availability::Unknown => "form__check form__check--unknown",
    }
}

/// Registration form. The password is collected once; the store duplicates
/// it into the confirmation fields the backend wants. A successful signup
/// logs straight in and navigates home.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());

    let username_check = RwSignal::new(None::<Availability>);
    let nickname_check = RwSignal::new(None::<Availability>);

    let on_check_username = move |_| {
        let name = username.get().trim().to_owned();
        if name.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let availability = session::check_username(&name).await;
            username_check.set(Some(availability));
        });
    };

    let on_check_nickname = move |_| {
        let name = nickname.get().trim().to_owned();
        if name.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let availability = session::check_nickname(&name).await;
            nickname_check.set(Some(availability));
        });
    };

    let submit = move |_| {
        let form = SignupForm {
            username: username.get().trim().to_owned(),
            password: password.get(),
            email: email.get().trim().to_owned(),
            nickname: nickname.get().trim().to_owned(),
            name: None,
        };
        if form.username.is_empty() || form.password.is_empty() {
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session::signup(session, form).await.is_ok() {
                navigate("/", NavigateOptions::default());
            }
        });
    };

    let check_badge = |check: RwSignal<Option<Availability>>| {
        move || {
            check.get().map(|availability| {
                view! {
                    <span class=availability_class(availability)>
                        {availability_label(availability)}
                    </span>
                }
            })
        }
    };

    view! {
        <div class="signup-page">
            <h1>"Sign up"</h1>
            <label class="form__label">
                "Username"
                <div class="form__row">
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            username.set(event_target_value(&ev));
                            username_check.set(None);
                        }
                    />
                    <button class="btn btn--small" on:click=on_check_username>
                        "Check"
                    </button>
                </div>
                {check_badge(username_check)}
            </label>
            <label class="form__label">
                "Nickname"
                <div class="form__row">
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || nickname.get()
                        on:input=move |ev| {
                            nickname.set(event_target_value(&ev));
                            nickname_check.set(None);
                        }
                    />
                    <button class="btn btn--small" on:click=on_check_nickname>
                        "Check"
                    </button>
                </div>
                {check_badge(nickname_check)}
            </label>
            <label class="form__label">
                "Email"
                <input
                    class="form__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Password"
                <input
                    class="form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            {move || {
                session.get().last_error.map(|msg| view! { <p class="form__error">{msg}</p> })
            }}
            <button
                class="btn btn--primary"
                disabled=move || session.get().loading
                on:click=submit
            >
                {move || if session.get().loading { "Signing up..." } else { "Sign up" }}
            </button>
        </div>
    }
}
