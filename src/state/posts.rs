//! Community post store: list, detail, CRUD, and like toggles.
//!
//! List and detail fetches degrade to an empty cache on failure so the
//! community views never crash on a cold backend; mutations return their
//! error because the user needs to know a write was dropped.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::gateway::ApiError;
use crate::net::types::{LikeResponse, Post, PostListing, PostPayload};
use crate::state::session::{self, SessionState};

/// Cached community posts.
#[derive(Clone, Debug, Default)]
pub struct PostsState {
    pub items: Vec<Post>,
    /// Total across all pages when the backend paginates, else `items.len()`.
    pub total_count: usize,
    pub active: Option<Post>,
    pub loading: bool,
}

// =============================================================
// Pure cache updates
// =============================================================

/// Normalize the two list response shapes into the cache.
fn apply_listing(state: &mut PostsState, listing: PostListing) {
    match listing {
        PostListing::Paginated { count, results } => {
            state.items = results;
            state.total_count = count;
        }
        PostListing::Plain(posts) => {
            state.total_count = posts.len();
            state.items = posts;
        }
    }
}

/// Fold a like toggle into every cached copy of the post.
fn apply_like(state: &mut PostsState, post_id: i64, like: LikeResponse) {
    if let Some(active) = state.active.as_mut() {
        if active.id == post_id {
            active.like_count = like.like_count;
            active.is_liked = like.liked;
        }
    }
    if let Some(item) = state.items.iter_mut().find(|p| p.id == post_id) {
        item.like_count = like.like_count;
        item.is_liked = like.liked;
    }
}

// =============================================================
// Operations
// =============================================================

/// Fetch the post list. Failures clear the cache instead of propagating.
/// Filters are owned so the future can outlive the caller's scope.
pub async fn load_posts(
    posts: RwSignal<PostsState>,
    category: Option<String>,
    search: Option<String>,
    page: usize,
) {
    posts.update(|p| p.loading = true);
    match api::posts(category.as_deref(), search.as_deref(), page).await {
        Ok(listing) => posts.update(|p| {
            apply_listing(p, listing);
            p.loading = false;
        }),
        Err(err) => {
            leptos::logging::warn!("post list fetch failed: {err}");
            posts.update(|p| {
                p.items.clear();
                p.total_count = 0;
                p.loading = false;
            });
        }
    }
}

/// Fetch one post into `active`.
///
/// # Errors
///
/// The [`ApiError`] of the fetch; a 403 means a secret post the current
/// user may not read, which the view turns into a redirect.
pub async fn load_post(posts: RwSignal<PostsState>, id: i64) -> Result<(), ApiError> {
    posts.update(|p| p.loading = true);
    match api::post_detail(id).await {
        Ok(post) => {
            posts.update(|p| {
                p.active = Some(post);
                p.loading = false;
            });
            Ok(())
        }
        Err(err) => {
            posts.update(|p| {
                p.active = None;
                p.loading = false;
            });
            Err(err)
        }
    }
}

/// Create a post.
///
/// # Errors
///
/// The [`ApiError`] of the write; unauthorized ends the session.
pub async fn create_post(
    session: RwSignal<SessionState>,
    payload: &PostPayload,
) -> Result<Post, ApiError> {
    api::create_post(payload)
        .await
        .inspect_err(|err| session::note_auth_failure(session, err))
}

/// Update a post and refresh the cached detail.
///
/// # Errors
///
/// Same contract as [`create_post`].
pub async fn update_post(
    session: RwSignal<SessionState>,
    posts: RwSignal<PostsState>,
    id: i64,
    payload: &PostPayload,
) -> Result<(), ApiError> {
    let updated = api::update_post(id, payload)
        .await
        .inspect_err(|err| session::note_auth_failure(session, err))?;
    posts.update(|p| p.active = Some(updated));
    Ok(())
}

/// Delete a post and drop it from the cache.
///
/// # Errors
///
/// Same contract as [`create_post`].
pub async fn delete_post(
    session: RwSignal<SessionState>,
    posts: RwSignal<PostsState>,
    id: i64,
) -> Result<(), ApiError> {
    api::delete_post(id)
        .await
        .inspect_err(|err| session::note_auth_failure(session, err))?;
    posts.update(|p| {
        p.items.retain(|post| post.id != id);
        p.total_count = p.total_count.saturating_sub(1);
        if p.active.as_ref().is_some_and(|post| post.id == id) {
            p.active = None;
        }
    });
    Ok(())
}

/// Toggle a like and fold the returned counts into the cache.
///
/// # Errors
///
/// Same contract as [`create_post`].
pub async fn like_post(
    session: RwSignal<SessionState>,
    posts: RwSignal<PostsState>,
    id: i64,
) -> Result<LikeResponse, ApiError> {
    match api::like_post(id).await {
        Ok(like) => {
            posts.update(|p| apply_like(p, id, like));
            Ok(like)
        }
        Err(err) => {
            session::note_auth_failure(session, &err);
            Err(err)
        }
    }
}
