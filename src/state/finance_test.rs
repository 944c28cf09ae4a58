use super::*;
use futures::executor::block_on;
use leptos::prelude::Get;

fn option_with_id(id: i64) -> ProductOption {
    ProductOption {
        id,
        save_trm: Some(12),
        intr_rate: Some(3.0),
        ..ProductOption::default()
    }
}

#[test]
fn finance_state_defaults_empty() {
    let f = FinanceState::default();
    assert!(f.deposit_products.is_empty());
    assert!(f.exchange_rates.is_empty());
    assert!(f.market.is_empty());
    assert!(f.recommendations.is_none());
    assert!(!f.main_loading);
}

#[test]
fn exchange_rate_lookup_by_currency_unit() {
    let mut f = FinanceState::default();
    f.exchange_rates = vec![
        ExchangeRate {
            cur_unit: "USD".to_owned(),
            deal_bas_r: "1,352.50".to_owned(),
            ..ExchangeRate::default()
        },
        ExchangeRate {
            cur_unit: "JPY(100)".to_owned(),
            deal_bas_r: "905.21".to_owned(),
            ..ExchangeRate::default()
        },
    ];

    assert_eq!(f.exchange_rate("USD").unwrap().deal_bas_r, "1,352.50");
    assert!(f.exchange_rate("EUR").is_none());
}

#[test]
fn sync_joined_mirrors_profile_lists() {
    let mut f = FinanceState::default();
    let profile = UserProfile {
        joined_deposits: vec![option_with_id(3), option_with_id(9)],
        joined_savings: vec![option_with_id(5)],
        ..UserProfile::default()
    };

    sync_joined(&mut f, &profile);

    assert_eq!(f.joined_deposit_ids(), HashSet::from([3, 9]));
    assert_eq!(f.joined_saving_ids(), HashSet::from([5]));
}

#[test]
fn apply_stocks_takes_rows_and_base_date() {
    let mut f = FinanceState::default();
    apply_stocks(
        &mut f,
        StockRecommendations {
            base_date: "2024-11-15".to_owned(),
            rows: vec![StockRow {
                ticker: "005930".to_owned(),
                score: 81.5,
                ..StockRow::default()
            }],
        },
    );
    assert_eq!(f.stock_base_date.as_deref(), Some("2024-11-15"));
    assert_eq!(f.recommended_stocks.len(), 1);

    // An empty screen clears the date rather than caching "".
    apply_stocks(&mut f, StockRecommendations::default());
    assert!(f.stock_base_date.is_none());
    assert!(f.recommended_stocks.is_empty());
}

#[test]
fn load_home_settles_loading_flags_on_failure() {
    let session = RwSignal::new(SessionState::default());
    let finance = RwSignal::new(FinanceState::default());

    // Native dispatch fails everywhere; the load must still settle.
    block_on(load_home(session, finance));

    let f = finance.get();
    assert!(!f.main_loading);
    assert!(!f.market_loading);
    assert!(!f.rec_loading);
    assert!(f.market.is_empty());
}

#[test]
fn failed_fetch_keeps_previous_cache() {
    let finance = RwSignal::new(FinanceState {
        exchange_rates: vec![ExchangeRate {
            cur_unit: "USD".to_owned(),
            ..ExchangeRate::default()
        }],
        ..FinanceState::default()
    });

    block_on(load_exchange_rates(finance));

    assert_eq!(finance.get().exchange_rates.len(), 1);
}

#[test]
fn toggle_join_propagates_the_error() {
    let session = RwSignal::new(SessionState::default());
    let finance = RwSignal::new(FinanceState::default());

    let res = block_on(toggle_deposit_join(session, finance, 7));
    assert_eq!(res.unwrap_err(), ApiError::Unavailable);
}

#[test]
fn load_recommendations_is_a_no_op_while_logged_out() {
    let session = RwSignal::new(SessionState::default());
    let finance = RwSignal::new(FinanceState::default());

    block_on(load_recommendations(session, finance));

    let f = finance.get();
    assert!(f.recommendations.is_none());
    assert!(!f.rec_loading);
}
