//! Wire types for the finance service's REST API.
//!
//! Field names mirror the backend's serializers, which in turn mirror the
//! FSS/EXIM open-data feeds (`fin_prdt_nm`, `cur_unit`, ...), so everything
//! round-trips with plain serde derives. Read-mostly payloads default their
//! optional fields instead of failing: the client treats them as tolerant
//! mappings and only dereferences what it displays.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================
// Accounts
// =============================================================

/// Login form payload.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Token issued by login and registration.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub key: String,
}

/// Signup form as collected by the view layer.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub nickname: String,
    pub name: Option<String>,
}

/// Registration payload in the shape the backend expects.
///
/// The registration endpoint requires the password twice
/// (`password1`/`password2`); the client collects it once and duplicates it.
#[derive(Clone, Debug, Serialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub password1: String,
    pub password2: String,
    pub email: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Current-user payload from `accounts/user/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub joined_deposits: Vec<ProductOption>,
    #[serde(default)]
    pub joined_savings: Vec<ProductOption>,
}

impl UserProfile {
    /// Display name: nickname if set, else the username.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.username)
    }
}

/// Body of `accounts/check-username/` and `accounts/check-nickname/`.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// Body of `accounts/verify-password/`.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct VerifyPasswordResponse {
    pub success: bool,
}

// =============================================================
// Finance reference data
// =============================================================

/// A deposit or saving product with its per-term rate options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub fin_prdt_cd: Option<String>,
    #[serde(default)]
    pub kor_co_nm: String,
    #[serde(default)]
    pub fin_prdt_nm: String,
    #[serde(default)]
    pub etc_note: Option<String>,
    #[serde(default)]
    pub join_way: Option<String>,
    #[serde(default)]
    pub spcl_cnd: Option<String>,
    #[serde(default)]
    pub intr_rate: Option<f64>,
    #[serde(default)]
    pub max_intr_rate: Option<f64>,
    #[serde(default)]
    pub options: Vec<ProductOption>,
}

/// A single term/rate option of a product. Also the shape of the
/// `joined_deposits`/`joined_savings` entries on the user profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: i64,
    #[serde(default)]
    pub intr_rate_type_nm: Option<String>,
    #[serde(default)]
    pub save_trm: Option<i64>,
    #[serde(default)]
    pub intr_rate: Option<f64>,
    #[serde(default)]
    pub intr_rate2: Option<f64>,
    #[serde(default)]
    pub fin_prdt_nm: Option<String>,
    #[serde(default)]
    pub kor_co_nm: Option<String>,
}

/// One row of `finlife/exchange-rate/`. The feed serves rates as
/// pre-formatted strings (`"1,352.50"`), which the client shows as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    #[serde(default)]
    pub cur_unit: String,
    #[serde(default)]
    pub cur_nm: String,
    #[serde(default)]
    pub ttb: Option<String>,
    #[serde(default)]
    pub tts: Option<String>,
    #[serde(default)]
    pub deal_bas_r: String,
}

/// One index entry of `finlife/market-status/`. Indices the backend failed
/// to quote come through as `null`, hence the `Option` in the snapshot map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub change: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default, rename = "isUp")]
    pub is_up: bool,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Full `finlife/market-status/` payload, keyed by index name.
pub type MarketSnapshot = BTreeMap<String, Option<MarketQuote>>;

/// Body of `finlife/recommend-stocks/`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StockRecommendations {
    #[serde(default)]
    pub base_date: String,
    #[serde(default)]
    pub rows: Vec<StockRow>,
}

/// One ranked row of the quant screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StockRow {
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default, rename = "DIV")]
    pub div: Option<f64>,
    #[serde(default, rename = "ROE_est")]
    pub roe_est: Option<f64>,
    #[serde(default, rename = "PER")]
    pub per: Option<f64>,
    #[serde(default, rename = "PBR")]
    pub pbr: Option<f64>,
    #[serde(default, rename = "Sector")]
    pub sector: Option<String>,
}

/// Body of `finlife/recommend/` (personalized product picks).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductRecommendations {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<Product>,
}

// =============================================================
// Community
// =============================================================

/// A community post, list or detail shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_secret: bool,
    #[serde(default)]
    pub user_nickname: Option<String>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment on a post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub user_nickname: Option<String>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Create/update payload for a post.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub category: String,
    pub is_secret: bool,
}

/// `community/posts/` answers either a DRF page or a bare array depending on
/// backend pagination settings; accept both.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PostListing {
    Paginated { count: usize, results: Vec<Post> },
    Plain(Vec<Post>),
}

/// Body of the post like toggle.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub dislike_count: i64,
}
