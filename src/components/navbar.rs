//! Top navigation bar with session-aware actions.

use leptos::prelude::*;

use crate::state::session::{self, SessionPhase, SessionState};

/// Site-wide navigation bar.
///
/// The right side reflects the session phase: login/signup links while
/// logged out, a greeting and logout button while logged in. Logout needs
/// no explicit navigation: public pages render fine logged out and guarded
/// pages redirect themselves when the session empties.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        leptos::task::spawn_local(session::logout(session));
    };

    let greeting = move || {
        session
            .get()
            .display_name()
            .unwrap_or_else(|| "My Page".to_owned())
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "Finboard"
            </a>
            <div class="navbar__links">
                <a href="/products">"Products"</a>
                <a href="/community">"Community"</a>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || session.get().phase() == SessionPhase::LoggedIn
                    fallback=|| {
                        view! {
                            <a class="navbar__login" href="/login">
                                "Log in"
                            </a>
                            <a class="navbar__signup" href="/signup">
                                "Sign up"
                            </a>
                        }
                    }
                >
                    <a class="navbar__mypage" href="/mypage">
                        {greeting}
                    </a>
                    <button class="btn" on:click=on_logout>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
