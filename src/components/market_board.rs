//! Market index tiles for the home page.

use leptos::prelude::*;

use crate::net::types::MarketQuote;
use crate::state::finance::FinanceState;

/// Grid of global market indices from the latest snapshot. Indices the
/// backend could not quote render as empty tiles rather than disappearing.
#[component]
pub fn MarketBoard() -> impl IntoView {
    let finance = expect_context::<RwSignal<FinanceState>>();

    view! {
        <section class="market-board">
            <h2>"Markets"</h2>
            <Show
                when=move || !finance.get().market_loading
                fallback=|| view! { <p class="market-board__loading">"Loading indices..."</p> }
            >
                <div class="market-board__grid">
                    <For
                        each={move || finance.get().market.into_iter().collect::<Vec<_>>()}
                        key=|(name, _)| name.clone()
                        children=|(name, quote)| view! { <MarketTile name=name quote=quote/> }
                    />
                </div>
            </Show>
        </section>
    }
}

/// One index tile: name, last value, daily change.
#[component]
fn MarketTile(name: String, quote: Option<MarketQuote>) -> impl IntoView {
    match quote {
        Some(q) => {
            let direction = if q.is_up {
                "market-tile market-tile--up"
            } else {
                "market-tile market-tile--down"
            };
            view! {
                <div class=direction>
                    <span class="market-tile__name">{name}</span>
                    <span class="market-tile__value">{q.value}</span>
                    <span class="market-tile__change">{format!("{} ({})", q.change, q.rate)}</span>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="market-tile market-tile--empty">
                <span class="market-tile__name">{name}</span>
                <span class="market-tile__value">"-"</span>
            </div>
        }
        .into_any(),
    }
}
