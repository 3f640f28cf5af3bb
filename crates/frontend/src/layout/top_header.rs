//! Application top bar: sidebar toggles, breadcrumb and the theme switch.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let toggle_right_panel = move |_| {
        ctx.toggle_right();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__breadcrumb">
                    "Dashboards / " {move || ctx.page.get().title()}
                </span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_right_panel
                    title=move || if ctx.right_open.get() { "Hide activity panel" } else { "Show activity panel" }
                >
                    {icon("panel-right")}
                </button>
            </div>
        </div>
    }
}
