//! Reference-data store: products, rates, market indices, recommendations.
//!
//! Everything here is read-mostly cache with no invalidation policy beyond
//! overwrite-on-fetch. Fetch failures are logged and leave the previous
//! cache in place; only the join toggles return errors, since the views
//! must tell the user a mutation was dropped.

#[cfg(test)]
#[path = "finance_test.rs"]
mod finance_test;

use std::collections::HashSet;

use leptos::prelude::{GetUntracked, RwSignal, Update};

use crate::net::api;
use crate::net::gateway::ApiError;
use crate::net::types::{
    ExchangeRate, MarketSnapshot, Product, ProductOption, ProductRecommendations,
    StockRecommendations, StockRow, UserProfile,
};
use crate::state::session::{self, SessionState};

/// Cached finance reference data for the product and market views.
#[derive(Clone, Debug, Default)]
pub struct FinanceState {
    pub deposit_products: Vec<Product>,
    pub saving_products: Vec<Product>,
    pub exchange_rates: Vec<ExchangeRate>,
    pub market: MarketSnapshot,
    pub recommended_stocks: Vec<StockRow>,
    pub stock_base_date: Option<String>,
    pub recommendations: Option<ProductRecommendations>,
    /// Product options the user joined, mirrored from the profile.
    pub joined_deposits: Vec<ProductOption>,
    pub joined_savings: Vec<ProductOption>,
    pub main_loading: bool,
    pub market_loading: bool,
    pub rec_loading: bool,
}

impl FinanceState {
    /// Rate row for a currency unit, e.g. `"USD"`.
    pub fn exchange_rate(&self, unit: &str) -> Option<&ExchangeRate> {
        self.exchange_rates.iter().find(|r| r.cur_unit == unit)
    }

    /// Joined deposit option ids, for membership checks in product lists.
    pub fn joined_deposit_ids(&self) -> HashSet<i64> {
        self.joined_deposits.iter().map(|o| o.id).collect()
    }

    /// Joined saving option ids.
    pub fn joined_saving_ids(&self) -> HashSet<i64> {
        self.joined_savings.iter().map(|o| o.id).collect()
    }
}

// =============================================================
// Pure cache updates
// =============================================================

/// Mirror the joined product lists from a freshly fetched profile.
fn sync_joined(state: &mut FinanceState, profile: &UserProfile) {
    state.joined_deposits = profile.joined_deposits.clone();
    state.joined_savings = profile.joined_savings.clone();
}

/// Install a quant-screen payload.
fn apply_stocks(state: &mut FinanceState, recs: StockRecommendations) {
    state.stock_base_date = (!recs.base_date.is_empty()).then_some(recs.base_date);
    state.recommended_stocks = recs.rows;
}

// =============================================================
// Fetch operations
// =============================================================

/// Fetch deposit products into the cache.
pub async fn load_deposits(finance: RwSignal<FinanceState>) {
    match api::deposit_products().await {
        Ok(products) => finance.update(|f| f.deposit_products = products),
        Err(err) => leptos::logging::warn!("deposit products fetch failed: {err}"),
    }
}

/// Fetch saving products into the cache.
pub async fn load_savings(finance: RwSignal<FinanceState>) {
    match api::saving_products().await {
        Ok(products) => finance.update(|f| f.saving_products = products),
        Err(err) => leptos::logging::warn!("saving products fetch failed: {err}"),
    }
}

/// Fetch the exchange-rate table into the cache.
pub async fn load_exchange_rates(finance: RwSignal<FinanceState>) {
    match api::exchange_rates().await {
        Ok(rates) => finance.update(|f| f.exchange_rates = rates),
        Err(err) => leptos::logging::warn!("exchange rates fetch failed: {err}"),
    }
}

/// Fetch the global market index snapshot.
pub async fn load_market(finance: RwSignal<FinanceState>) {
    finance.update(|f| f.market_loading = true);
    match api::market_status().await {
        Ok(snapshot) => finance.update(|f| {
            f.market = snapshot;
            f.market_loading = false;
        }),
        Err(err) => {
            leptos::logging::warn!("market status fetch failed: {err}");
            finance.update(|f| f.market_loading = false);
        }
    }
}

/// Fetch the quant stock screen.
pub async fn load_stock_recommendations(finance: RwSignal<FinanceState>) {
    finance.update(|f| f.rec_loading = true);
    match api::stock_recommendations().await {
        Ok(recs) => finance.update(|f| {
            apply_stocks(f, recs);
            f.rec_loading = false;
        }),
        Err(err) => {
            leptos::logging::warn!("stock recommendations fetch failed: {err}");
            finance.update(|f| f.rec_loading = false);
        }
    }
}

/// Fetch the personalized product picks. No-op while logged out.
pub async fn load_recommendations(
    session: RwSignal<SessionState>,
    finance: RwSignal<FinanceState>,
) {
    if !session.get_untracked().is_logged_in() {
        return;
    }
    finance.update(|f| f.rec_loading = true);
    match api::product_recommendations().await {
        Ok(recs) => finance.update(|f| {
            f.recommendations = Some(recs);
            f.rec_loading = false;
        }),
        Err(err) => {
            session::note_auth_failure(session, &err);
            leptos::logging::warn!("product recommendations fetch failed: {err}");
            finance.update(|f| f.rec_loading = false);
        }
    }
}

/// Re-sync the joined product lists through a profile refresh.
pub async fn load_joined(session: RwSignal<SessionState>, finance: RwSignal<FinanceState>) {
    if let Err(err) = session::refresh_profile(session).await {
        leptos::logging::warn!("joined products sync failed: {err}");
        return;
    }
    if let Some(profile) = session.get_untracked().user {
        finance.update(|f| sync_joined(f, &profile));
    }
}

/// Load everything the home view shows. The independent fetches run
/// concurrently and each writes a disjoint field of the store.
pub async fn load_home(session: RwSignal<SessionState>, finance: RwSignal<FinanceState>) {
    finance.update(|f| f.main_loading = true);
    futures::join!(
        load_market(finance),
        load_stock_recommendations(finance),
        load_exchange_rates(finance),
    );
    if session.get_untracked().is_logged_in() {
        load_joined(session, finance).await;
        load_recommendations(session, finance).await;
    }
    finance.update(|f| f.main_loading = false);
}

// =============================================================
// Mutations
// =============================================================

/// Toggle membership of a deposit option, then re-sync the joined lists
/// and recommendations.
///
/// # Errors
///
/// The [`ApiError`] of the toggle itself; an unauthorized answer has
/// already ended the session.
pub async fn toggle_deposit_join(
    session: RwSignal<SessionState>,
    finance: RwSignal<FinanceState>,
    option_id: i64,
) -> Result<(), ApiError> {
    api::toggle_deposit_join(option_id)
        .await
        .inspect_err(|err| session::note_auth_failure(session, err))?;
    load_joined(session, finance).await;
    load_recommendations(session, finance).await;
    Ok(())
}

/// Toggle membership of a saving option, then re-sync.
///
/// # Errors
///
/// Same contract as [`toggle_deposit_join`].
pub async fn toggle_saving_join(
    session: RwSignal<SessionState>,
    finance: RwSignal<FinanceState>,
    option_id: i64,
) -> Result<(), ApiError> {
    api::toggle_saving_join(option_id)
        .await
        .inspect_err(|err| session::note_auth_failure(session, err))?;
    load_joined(session, finance).await;
    load_recommendations(session, finance).await;
    Ok(())
}
