//! Post detail page with like toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::posts::{self, PostsState};
use crate::state::session::SessionState;

/// Detail view for one community post. Reads the post ID from the route,
/// loads it on mount, and bounces back to the list when the post cannot be
/// read (missing, or secret and not ours).
#[component]
pub fn PostPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let posts = expect_context::<RwSignal<PostsState>>();
    let params = use_params_map();

    let post_id = move || {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
    };

    let navigate = use_navigate();
    Effect::new(move || {
        let Some(id) = post_id() else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if posts::load_post(posts, id).await.is_err() {
                navigate("/community", NavigateOptions::default());
            }
        });
    });

    let on_like = move |_| {
        let Some(id) = post_id() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let Err(err) = posts::like_post(session, posts, id).await {
                leptos::logging::warn!("like toggle failed: {err}");
            }
        });
    };

    view! {
        <div class="post-page">
            {move || {
                posts
                    .get()
                    .active
                    .map(|post| {
                        let author = post
                            .user_nickname
                            .clone()
                            .unwrap_or_else(|| "anonymous".to_owned());
                        let like_label = format!(
                            "{} {}",
                            if post.is_liked { "Unlike" } else { "Like" },
                            post.like_count,
                        );
                        let comments = post
                            .comments
                            .iter()
                            .map(|comment| {
                                let who = comment
                                    .user_nickname
                                    .clone()
                                    .unwrap_or_else(|| "anonymous".to_owned());
                                view! {
                                    <li class="post-page__comment">
                                        <span class="post-page__comment-author">{who}</span>
                                        <span>{comment.content.clone()}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <article class="post-page__article">
                                <h1>{post.title.clone()}</h1>
                                <p class="post-page__meta">{author}</p>
                                <div class="post-page__content">{post.content.clone()}</div>
                                <Show when=move || session.get().is_logged_in()>
                                    <button class="btn" on:click=on_like>
                                        {like_label.clone()}
                                    </button>
                                </Show>
                                <section class="post-page__comments">
                                    <h2>{format!("Comments ({})", post.comment_count)}</h2>
                                    <ul>{comments}</ul>
                                </section>
                            </article>
                        }
                    })
            }}
            <a class="post-page__back" href="/community">
                "Back to community"
            </a>
        </div>
    }
}
