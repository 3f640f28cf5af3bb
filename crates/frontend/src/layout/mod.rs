pub mod global_context;
pub mod left;
pub mod right;
pub mod top_header;

use crate::dashboards::home::HomePage;
use crate::domain::orders::ui::OrdersPage;
use global_context::{use_global_context, Page};
use left::LeftNav;
use leptos::prelude::*;
use right::RightPanel;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |  LeftNav  |    Content    |  RightPanel  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <LeftNav />

                <main class="app-main">
                    {move || match ctx.page.get() {
                        Page::Dashboard => view! { <HomePage /> }.into_any(),
                        Page::Orders => view! { <OrdersPage /> }.into_any(),
                    }}
                </main>

                <Show when=move || ctx.right_open.get()>
                    <RightPanel />
                </Show>
            </div>
        </div>
    }
}
