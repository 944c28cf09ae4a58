//! My page: profile snapshot, identity re-check, account actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Account page. Redirects to `/login` when the session empties (which
/// also covers pressing logout here). Sensitive profile details stay
/// hidden until the user re-confirms their password.
#[component]
pub fn MyPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Redirect to login if not authenticated.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_logged_in() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let candidate = RwSignal::new(String::new());
    let verified = RwSignal::new(None::<bool>);

    let on_verify = move |_| {
        let password = candidate.get();
        if password.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let ok = session::verify_password(session, &password).await;
            verified.set(Some(ok));
        });
    };

    let on_logout = move |_| {
        leptos::task::spawn_local(session::logout(session));
    };

    let profile_line = move |label: &'static str, value: Option<String>| {
        view! {
            <li class="mypage__row">
                <span class="mypage__label">{label}</span>
                <span class="mypage__value">{value.unwrap_or_else(|| "-".to_owned())}</span>
            </li>
        }
    };

    view! {
        <div class="mypage">
            <h1>"My Page"</h1>
            {move || {
                session
                    .get()
                    .user
                    .map(|user| {
                        let joined = format!(
                            "{} deposits, {} savings",
                            user.joined_deposits.len(),
                            user.joined_savings.len(),
                        );
                        view! {
                            <ul class="mypage__profile">
                                {profile_line("Username", Some(user.username.clone()))}
                                {profile_line("Nickname", user.nickname.clone())}
                                {profile_line("Joined products", Some(joined))}
                            </ul>
                        }
                    })
            }}

            <section class="mypage__sensitive">
                <h2>"Account details"</h2>
                <Show
                    when=move || verified.get() == Some(true)
                    fallback=move || {
                        view! {
                            <p class="mypage__hint">
                                "Re-enter your password to view account details."
                            </p>
                            <div class="form__row">
                                <input
                                    class="form__input"
                                    type="password"
                                    prop:value=move || candidate.get()
                                    on:input=move |ev| {
                                        candidate.set(event_target_value(&ev));
                                        verified.set(None);
                                    }
                                />
                                <button class="btn" on:click=on_verify>
                                    "Confirm"
                                </button>
                            </div>
                            <Show when=move || verified.get() == Some(false)>
                                <p class="form__error">"Password did not match."</p>
                            </Show>
                        }
                    }
                >
                    {move || {
                        session
                            .get()
                            .user
                            .map(|user| {
                                view! {
                                    <ul class="mypage__profile">
                                        {profile_line("Email", user.email.clone())}
                                        {profile_line("Name", user.name.clone())}
                                    </ul>
                                }
                            })
                    }}
                </Show>
            </section>

            <button class="btn mypage__logout" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}
