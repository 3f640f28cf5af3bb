//! Left navigation sidebar.

use crate::layout::global_context::{use_global_context, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

const NAV_ITEMS: [(Page, &str); 2] = [(Page::Dashboard, "dashboard"), (Page::Orders, "orders")];

#[component]
pub fn LeftNav() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Show when=move || ctx.left_open.get()>
            <nav class="left-nav">
                <div class="left-nav__brand">"ByeWind"</div>
                <ul class="left-nav__list">
                    {NAV_ITEMS.iter().map(|&(page, icon_name)| {
                        let is_active = move || ctx.page.get() == page;
                        view! {
                            <li>
                                <button
                                    class="left-nav__item"
                                    class=("left-nav__item--active", is_active)
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {icon(icon_name)}
                                    <span>{page.title()}</span>
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </Show>
    }
}
