//! Exchange-rate table for the home page.

use leptos::prelude::*;

use crate::state::finance::FinanceState;

/// Table of exchange rates as served by the backend. The feed formats the
/// rates itself, so the cells render the strings verbatim.
#[component]
pub fn RateTable() -> impl IntoView {
    let finance = expect_context::<RwSignal<FinanceState>>();

    view! {
        <section class="rate-table">
            <h2>"Exchange Rates"</h2>
            <table class="rate-table__table">
                <thead>
                    <tr>
                        <th>"Currency"</th>
                        <th>"Name"</th>
                        <th>"Base Rate"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || finance.get().exchange_rates
                        key=|rate| rate.cur_unit.clone()
                        children=|rate| {
                            view! {
                                <tr>
                                    <td>{rate.cur_unit}</td>
                                    <td>{rate.cur_nm}</td>
                                    <td class="rate-table__rate">{rate.deal_bas_r}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
