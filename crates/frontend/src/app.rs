use crate::domain::orders::state::OrdersState;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shell state and the orders store live at the root so created orders
    // survive page switches.
    provide_context(AppGlobalContext::new());
    provide_context(OrdersState::new());

    view! {
        <ThemeProvider>
            <Shell />
        </ThemeProvider>
    }
}
