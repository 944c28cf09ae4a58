//! Home page: market snapshot, exchange rates, and the quant stock screen.

use leptos::prelude::*;

use crate::components::market_board::MarketBoard;
use crate::components::rate_table::RateTable;
use crate::state::finance::{self, FinanceState};
use crate::state::session::SessionState;

/// Landing page. Kicks off the concurrent home-data load on mount; the
/// sections below fill in as their fetches land.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let finance = expect_context::<RwSignal<FinanceState>>();

    // No tracked reads, so this runs once on mount.
    Effect::new(move || {
        leptos::task::spawn_local(finance::load_home(session, finance));
    });

    let greeting = move || {
        session
            .get()
            .display_name()
            .map(|name| format!("Welcome back, {name}."))
    };

    view! {
        <div class="home-page">
            <Show when=move || session.get().is_logged_in()>
                <p class="home-page__greeting">{greeting}</p>
            </Show>
            <MarketBoard/>
            <div class="home-page__columns">
                <RateTable/>
                <StockPicks/>
            </div>
            <Recommendations/>
        </div>
    }
}

/// Top rows of the quant screen.
#[component]
fn StockPicks() -> impl IntoView {
    let finance = expect_context::<RwSignal<FinanceState>>();

    let base_date = move || {
        finance
            .get()
            .stock_base_date
            .map(|d| format!("as of {d}"))
            .unwrap_or_default()
    };

    view! {
        <section class="stock-picks">
            <h2>"Stock Picks" <small class="stock-picks__date">{base_date}</small></h2>
            <table class="stock-picks__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Score"</th>
                        <th>"PER"</th>
                        <th>"PBR"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || {
                            finance.get().recommended_stocks.into_iter().take(10).collect::<Vec<_>>()
                        }
                        key=|row| row.ticker.clone()
                        children=|row| {
                            let per = row.per.map_or_else(|| "-".to_owned(), |v| format!("{v:.1}"));
                            let pbr = row.pbr.map_or_else(|| "-".to_owned(), |v| format!("{v:.1}"));
                            view! {
                                <tr>
                                    <td>{row.name}</td>
                                    <td>{format!("{:.1}", row.score)}</td>
                                    <td>{per}</td>
                                    <td>{pbr}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

/// Personalized product picks, shown only when the backend produced any.
#[component]
fn Recommendations() -> impl IntoView {
    let finance = expect_context::<RwSignal<FinanceState>>();

    view! {
        <Show when=move || finance.get().recommendations.is_some()>
            <section class="recommendations">
                <h2>"Picked for you"</h2>
                <p class="recommendations__message">
                    {move || finance.get().recommendations.map(|r| r.message).unwrap_or_default()}
                </p>
                <ul class="recommendations__list">
                    <For
                        each=move || {
                            finance
                                .get()
                                .recommendations
                                .map(|r| r.data)
                                .unwrap_or_default()
                        }
                        key=|product| product.id
                        children=|product| {
                            view! {
                                <li class="recommendations__item">
                                    <span>{product.kor_co_nm.clone()}</span>
                                    <span>{product.fin_prdt_nm.clone()}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </Show>
    }
}
