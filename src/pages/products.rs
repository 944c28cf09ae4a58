//! Deposit and saving product lists with join toggles.

use leptos::prelude::*;

use crate::components::product_card::{ProductCard, ProductKind};
use crate::state::finance::{self, FinanceState};
use crate::state::session::SessionState;

/// Product catalog page. Loads both families up front and re-syncs the
/// user's joined options so the toggles render correctly.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let finance = expect_context::<RwSignal<FinanceState>>();

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            futures::join!(
                finance::load_deposits(finance),
                finance::load_savings(finance),
            );
            if session.get_untracked().is_logged_in() {
                finance::load_joined(session, finance).await;
            }
        });
    });

    let tab = RwSignal::new(ProductKind::Deposit);

    let tab_class = move |kind: ProductKind| {
        if tab.get() == kind {
            "products-page__tab products-page__tab--active"
        } else {
            "products-page__tab"
        }
    };

    view! {
        <div class="products-page">
            <header class="products-page__header">
                <h1>"Products"</h1>
                <div class="products-page__tabs">
                    <button
                        class=move || tab_class(ProductKind::Deposit)
                        on:click=move |_| tab.set(ProductKind::Deposit)
                    >
                        "Deposits"
                    </button>
                    <button
                        class=move || tab_class(ProductKind::Saving)
                        on:click=move |_| tab.set(ProductKind::Saving)
                    >
                        "Savings"
                    </button>
                </div>
            </header>
            <div class="products-page__list">
                <For
                    each=move || match tab.get() {
                        ProductKind::Deposit => finance.get().deposit_products,
                        ProductKind::Saving => finance.get().saving_products,
                    }
                    key=|product| product.id
                    children=move |product| {
                        view! { <ProductCard product=product kind=tab.get_untracked()/> }
                    }
                />
            </div>
        </div>
    }
}
