//! Card for a deposit/saving product with its per-term rate options.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::finance::{self, FinanceState};
use crate::state::session::SessionState;

/// Which product family a card belongs to. Decides the join endpoint and
/// which joined-option set the buttons check against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductKind {
    Deposit,
    Saving,
}

/// A product with bank name, headline rates, and a join toggle per option
/// for logged-in users.
#[component]
pub fn ProductCard(product: Product, kind: ProductKind) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let finance = expect_context::<RwSignal<FinanceState>>();

    let headline = match (product.intr_rate, product.max_intr_rate) {
        (Some(base), Some(max)) => format!("{base:.2}% (max {max:.2}%)"),
        (Some(base), None) => format!("{base:.2}%"),
        _ => String::new(),
    };

    let options = product
        .options
        .iter()
        .map(|option| {
            let option_id = option.id;
            let term = option
                .save_trm
                .map_or_else(|| "-".to_owned(), |t| format!("{t} mo"));
            let rate = option
                .intr_rate
                .map_or_else(|| "-".to_owned(), |r| format!("{r:.2}%"));
            let top_rate = option
                .intr_rate2
                .map_or_else(String::new, |r| format!(" / up to {r:.2}%"));

            let joined = move || match kind {
                ProductKind::Deposit => finance.get().joined_deposit_ids().contains(&option_id),
                ProductKind::Saving => finance.get().joined_saving_ids().contains(&option_id),
            };

            let on_toggle = move |_| {
                leptos::task::spawn_local(async move {
                    let result = match kind {
                        ProductKind::Deposit => {
                            finance::toggle_deposit_join(session, finance, option_id).await
                        }
                        ProductKind::Saving => {
                            finance::toggle_saving_join(session, finance, option_id).await
                        }
                    };
                    if let Err(err) = result {
                        leptos::logging::warn!("join toggle failed: {err}");
                    }
                });
            };

            view! {
                <li class="product-card__option">
                    <span class="product-card__term">{term}</span>
                    <span class="product-card__rate">{rate} {top_rate}</span>
                    <Show when=move || session.get().is_logged_in()>
                        <button class="btn btn--small" on:click=on_toggle>
                            {move || if joined() { "Leave" } else { "Join" }}
                        </button>
                    </Show>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="product-card">
            <header class="product-card__header">
                <span class="product-card__bank">{product.kor_co_nm.clone()}</span>
                <span class="product-card__name">{product.fin_prdt_nm.clone()}</span>
                <span class="product-card__headline">{headline}</span>
            </header>
            <ul class="product-card__options">{options}</ul>
        </div>
    }
}
