//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    community::CommunityPage, home::HomePage, login::LoginPage, mypage::MyPage, post::PostPage,
    products::ProductsPage, signup::SignupPage,
};
use crate::state::finance::FinanceState;
use crate::state::posts::PostsState;
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the shared stores, provides them via context, and sets up
/// client-side routing. The session is restored from the durable slot
/// before the first render, then settled against the backend once the
/// client is up.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let finance = RwSignal::new(FinanceState::default());
    let posts = RwSignal::new(PostsState::default());

    provide_context(session);
    provide_context(finance);
    provide_context(posts);

    // Confirm the optimistic session once on startup. An invalid persisted
    // token ends logged out; a slow backend keeps the optimistic state.
    Effect::new(move || {
        leptos::task::spawn_local(session::initialize(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/finboard.css"/>
        <Title text="Finboard"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("community") view=CommunityPage/>
                    <Route path=(StaticSegment("community"), ParamSegment("id")) view=PostPage/>
                    <Route path=StaticSegment("mypage") view=MyPage/>
                </Routes>
            </main>
        </Router>
    }
}
