//! Post list row linking to the detail page.

use leptos::prelude::*;

use crate::net::types::Post;

/// A clickable row for one community post.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/community/{}", post.id);
    let author = post
        .user_nickname
        .clone()
        .unwrap_or_else(|| "anonymous".to_owned());
    let badge = post
        .is_secret
        .then(|| view! { <span class="post-card__secret">"Secret"</span> });
    let meta = format!(
        "{author} | likes {} | comments {}",
        post.like_count, post.comment_count
    );

    view! {
        <a class="post-card" href=href>
            <span class="post-card__title">{post.title.clone()} {badge}</span>
            <span class="post-card__meta">{meta}</span>
        </a>
    }
}
