use super::*;
use futures::executor::block_on;
use leptos::prelude::Get;

fn post(id: i64, title: &str) -> Post {
    Post {
        id,
        title: title.to_owned(),
        ..Post::default()
    }
}

#[test]
fn posts_state_defaults() {
    let p = PostsState::default();
    assert!(p.items.is_empty());
    assert_eq!(p.total_count, 0);
    assert!(p.active.is_none());
    assert!(!p.loading);
}

#[test]
fn apply_listing_paginated_keeps_full_count() {
    let mut state = PostsState::default();
    apply_listing(
        &mut state,
        PostListing::Paginated {
            count: 42,
            results: vec![post(1, "a"), post(2, "b")],
        },
    );
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.total_count, 42);
}

#[test]
fn apply_listing_plain_counts_items() {
    let mut state = PostsState::default();
    apply_listing(&mut state, PostListing::Plain(vec![post(1, "a")]));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.total_count, 1);
}

#[test]
fn apply_like_updates_list_and_active_copies() {
    let mut state = PostsState {
        items: vec![post(1, "a"), post(2, "b")],
        active: Some(post(2, "b")),
        ..PostsState::default()
    };

    apply_like(
        &mut state,
        2,
        LikeResponse {
            liked: true,
            like_count: 10,
            dislike_count: 0,
        },
    );

    assert_eq!(state.items[1].like_count, 10);
    assert!(state.items[1].is_liked);
    assert_eq!(state.active.as_ref().unwrap().like_count, 10);
    // Untouched post keeps its counts.
    assert_eq!(state.items[0].like_count, 0);
}

#[test]
fn apply_like_on_unknown_post_is_a_no_op() {
    let mut state = PostsState {
        items: vec![post(1, "a")],
        ..PostsState::default()
    };
    apply_like(
        &mut state,
        99,
        LikeResponse {
            liked: true,
            like_count: 3,
            dislike_count: 0,
        },
    );
    assert_eq!(state.items[0].like_count, 0);
}

#[test]
fn failed_list_fetch_clears_the_cache() {
    let posts = RwSignal::new(PostsState {
        items: vec![post(1, "stale")],
        total_count: 1,
        ..PostsState::default()
    });

    block_on(load_posts(posts, None, None, 1));

    let state = posts.get();
    assert!(state.items.is_empty());
    assert_eq!(state.total_count, 0);
    assert!(!state.loading);
}

#[test]
fn failed_detail_fetch_clears_active_and_reports() {
    let posts = RwSignal::new(PostsState {
        active: Some(post(1, "stale")),
        ..PostsState::default()
    });

    let res = block_on(load_post(posts, 1));

    assert!(res.is_err());
    let state = posts.get();
    assert!(state.active.is_none());
    assert!(!state.loading);
}

#[test]
fn delete_post_requires_the_backend() {
    let session = RwSignal::new(SessionState::default());
    let posts = RwSignal::new(PostsState {
        items: vec![post(1, "a")],
        total_count: 1,
        ..PostsState::default()
    });

    // Native dispatch fails, so the cache must keep the post.
    assert!(block_on(delete_post(session, posts, 1)).is_err());
    assert_eq!(posts.get().items.len(), 1);
}
