//! Community page: post list with search and a create-post dialog.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::types::PostPayload;
use crate::state::posts::{self, PostsState};
use crate::state::session::SessionState;

/// Community board. Lists posts, filters by search term, and opens a
/// create dialog for logged-in users.
#[component]
pub fn CommunityPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let posts = expect_context::<RwSignal<PostsState>>();

    Effect::new(move || {
        leptos::task::spawn_local(posts::load_posts(posts, None, None, 1));
    });

    let search = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let on_close = Callback::new(move |()| show_create.set(false));

    let on_search = move |_| {
        let term = search.get().trim().to_owned();
        leptos::task::spawn_local(async move {
            let term = (!term.is_empty()).then_some(term);
            posts::load_posts(posts, None, term, 1).await;
        });
    };

    view! {
        <div class="community-page">
            <header class="community-page__header">
                <h1>"Community"</h1>
                <div class="community-page__actions">
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Search posts"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=on_search>
                        "Search"
                    </button>
                    <Show when=move || session.get().is_logged_in()>
                        <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                            "+ New Post"
                        </button>
                    </Show>
                </div>
            </header>

            <p class="community-page__count">
                {move || format!("{} posts", posts.get().total_count)}
            </p>

            <Show
                when=move || !posts.get().loading
                fallback=|| view! { <p>"Loading posts..."</p> }
            >
                <div class="community-page__list">
                    <For
                        each=move || posts.get().items
                        key=|post| post.id
                        children=|post| view! { <PostCard post=post/> }
                    />
                </div>
            </Show>

            <Show when=move || show_create.get()>
                <CreatePostDialog on_close=on_close/>
            </Show>
        </div>
    }
}

/// Modal dialog for writing a new post. On success the list is reloaded
/// and the dialog closes.
#[component]
fn CreatePostDialog(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let posts = expect_context::<RwSignal<PostsState>>();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new("free".to_owned());
    let is_secret = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = move |_| {
        let payload = PostPayload {
            title: title.get().trim().to_owned(),
            content: content.get(),
            category: category.get(),
            is_secret: is_secret.get(),
        };
        if payload.title.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match posts::create_post(session, &payload).await {
                Ok(_) => {
                    posts::load_posts(posts, None, None, 1).await;
                    on_close.run(());
                }
                Err(err) => error.set(Some(format!("Could not publish: {err}"))),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Post"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="free">"Free board"</option>
                        <option value="qna">"Q&A"</option>
                        <option value="inquiry">"Inquiry"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="dialog__input dialog__input--textarea"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_secret.get()
                        on:change=move |ev| is_secret.set(event_target_checked(&ev))
                    />
                    "Secret post"
                </label>
                {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Publish"
                    </button>
                </div>
            </div>
        </div>
    }
}
