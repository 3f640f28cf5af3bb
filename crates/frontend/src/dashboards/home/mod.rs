//! Dashboard landing page: the stats grid and the top selling products table.

use contracts::domain::product::TOP_SELLING_PRODUCTS;
use contracts::shared::indicators::dashboard_stats;
use leptos::prelude::*;

use crate::shared::components::{PageHeader, StatCardView};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <PageHeader title="eCommerce".to_string() />

            <div class="stat-grid">
                {dashboard_stats().into_iter().map(|card| view! {
                    <StatCardView card=card />
                }).collect_view()}
            </div>

            <section class="panel">
                <h3 class="panel__heading">"Top Selling Products"</h3>
                <table class="table table--compact">
                    <thead>
                        <tr>
                            <th class="table__cell">"Name"</th>
                            <th class="table__cell">"Price"</th>
                            <th class="table__cell">"Quantity"</th>
                            <th class="table__cell">"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {TOP_SELLING_PRODUCTS.iter().map(|product| view! {
                            <tr class="table__row">
                                <td class="table__cell">{product.name.clone()}</td>
                                <td class="table__cell">{product.price.clone()}</td>
                                <td class="table__cell">{product.quantity}</td>
                                <td class="table__cell">{product.amount.clone()}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
