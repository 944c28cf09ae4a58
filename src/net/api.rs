//! One async function per backend endpoint.
//!
//! These are thin: each names a path, picks a verb, and leans on the
//! gateway for the base address, auth header, and JSON codec. Stores decide
//! what a failure means.

use super::gateway::{self, ApiError};
use super::types::{
    AvailabilityResponse, Credentials, ExchangeRate, LikeResponse, MarketSnapshot, Post,
    PostListing, PostPayload, Product, ProductRecommendations, RegistrationRequest,
    StockRecommendations, TokenResponse, UserProfile, VerifyPasswordResponse,
};

// =============================================================
// Accounts
// =============================================================

/// POST `accounts/login/`.
///
/// # Errors
///
/// `Status` with a 400-class code on rejected credentials.
pub async fn login(credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    gateway::post_json("accounts/login/", credentials).await
}

/// POST `accounts/registration/`. Succeeds with a token, like login.
///
/// # Errors
///
/// `Status` with the backend's field validation payload on rejection.
pub async fn register(request: &RegistrationRequest) -> Result<TokenResponse, ApiError> {
    gateway::post_json("accounts/registration/", request).await
}

/// POST `accounts/logout/`.
///
/// # Errors
///
/// Returns the gateway error; the session store ignores it.
pub async fn logout() -> Result<(), ApiError> {
    gateway::post_unit("accounts/logout/").await
}

/// GET `accounts/user/`: the authenticated user's profile.
///
/// # Errors
///
/// `Status { code: 401.. }` when the token is missing or expired.
pub async fn current_user() -> Result<UserProfile, ApiError> {
    gateway::get_json("accounts/user/").await
}

/// GET `accounts/check-username/{username}/`.
///
/// # Errors
///
/// Returns the gateway error; callers degrade it to "unknown".
pub async fn check_username(username: &str) -> Result<AvailabilityResponse, ApiError> {
    gateway::get_json(&format!("accounts/check-username/{username}/")).await
}

/// GET `accounts/check-nickname/{nickname}/`.
///
/// # Errors
///
/// Returns the gateway error; callers degrade it to "unknown".
pub async fn check_nickname(nickname: &str) -> Result<AvailabilityResponse, ApiError> {
    gateway::get_json(&format!("accounts/check-nickname/{nickname}/")).await
}

/// POST `accounts/verify-password/`: re-confirm the current user's identity.
///
/// # Errors
///
/// Returns the gateway error; callers collapse it to `false`.
pub async fn verify_password(password: &str) -> Result<VerifyPasswordResponse, ApiError> {
    gateway::post_json(
        "accounts/verify-password/",
        &serde_json::json!({ "password": password }),
    )
    .await
}

// =============================================================
// Finance reference data
// =============================================================

/// GET `finlife/deposits/`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn deposit_products() -> Result<Vec<Product>, ApiError> {
    gateway::get_json("finlife/deposits/").await
}

/// GET `finlife/savings/`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn saving_products() -> Result<Vec<Product>, ApiError> {
    gateway::get_json("finlife/savings/").await
}

/// GET `finlife/exchange-rate/`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn exchange_rates() -> Result<Vec<ExchangeRate>, ApiError> {
    gateway::get_json("finlife/exchange-rate/").await
}

/// GET `finlife/market-status/`: global market index snapshot.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn market_status() -> Result<MarketSnapshot, ApiError> {
    gateway::get_json("finlife/market-status/").await
}

/// GET `finlife/recommend-stocks/`: quant-ranked stock rows.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn stock_recommendations() -> Result<StockRecommendations, ApiError> {
    gateway::get_json("finlife/recommend-stocks/").await
}

/// GET `finlife/recommend/`: personalized product picks (authenticated).
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn product_recommendations() -> Result<ProductRecommendations, ApiError> {
    gateway::get_json("finlife/recommend/").await
}

/// POST `finlife/deposits/join/{option_id}/`: toggle joining a deposit option.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn toggle_deposit_join(option_id: i64) -> Result<(), ApiError> {
    gateway::post_unit(&format!("finlife/deposits/join/{option_id}/")).await
}

/// POST `finlife/savings/join/{option_id}/`: toggle joining a saving option.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn toggle_saving_join(option_id: i64) -> Result<(), ApiError> {
    gateway::post_unit(&format!("finlife/savings/join/{option_id}/")).await
}

// =============================================================
// Community
// =============================================================

/// GET `community/posts/` with optional category/search/page filters.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn posts(
    category: Option<&str>,
    search: Option<&str>,
    page: usize,
) -> Result<PostListing, ApiError> {
    let mut query: Vec<(&str, String)> = vec![("page", page.to_string())];
    if let Some(category) = category {
        query.push(("category", category.to_owned()));
    }
    if let Some(search) = search {
        query.push(("search", search.to_owned()));
    }
    gateway::get_json_with_query("community/posts/", &query).await
}

/// GET `community/posts/{id}/`.
///
/// # Errors
///
/// `Status { code: 403.. }` for secret posts the user cannot read.
pub async fn post_detail(id: i64) -> Result<Post, ApiError> {
    gateway::get_json(&format!("community/posts/{id}/")).await
}

/// POST `community/posts/`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn create_post(payload: &PostPayload) -> Result<Post, ApiError> {
    gateway::post_json("community/posts/", payload).await
}

/// PUT `community/posts/{id}/`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn update_post(id: i64, payload: &PostPayload) -> Result<Post, ApiError> {
    gateway::put_json(&format!("community/posts/{id}/"), payload).await
}

/// DELETE `community/posts/{id}/`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn delete_post(id: i64) -> Result<(), ApiError> {
    gateway::delete(&format!("community/posts/{id}/")).await
}

/// POST `community/posts/{id}/like/`: toggle the like state.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn like_post(id: i64) -> Result<LikeResponse, ApiError> {
    gateway::post_empty(&format!("community/posts/{id}/like/")).await
}
